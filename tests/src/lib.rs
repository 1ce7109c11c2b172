//! End-to-end checks of the demo driven through the public API.

#[cfg(test)]
mod scenario;
