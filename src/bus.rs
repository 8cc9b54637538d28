/// Non-owning association with the enclosing bus.
///
/// The bus dispatcher mints one handle per bus instance and hands it to each
/// device it hosts. The controller records the association for future
/// cross-component coordination but never acts through it; address
/// classification and routing stay on the bus side.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BusHandle(u32);

impl BusHandle {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn id(self) -> u32 {
        self.0
    }
}
