pub mod central ; pub mod classes ; pub mod global ;