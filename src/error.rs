#[cfg_attr(debug_assertions, derive(Debug))]
pub enum Error {
    /// The platform allocator could not provide the requested buffer
    OutOfMemory(usize),
}
