#[cfg(debug_assertions)]
pub fn log(msg: &str) {
    println!("[CL] {}", msg);
}

#[cfg(not(debug_assertions))]
pub fn log(_msg: &str) {}
