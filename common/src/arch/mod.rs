#[cfg(all(target_arch = "arm", target_os = "none"))]
pub mod arm;
