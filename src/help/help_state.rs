/// Help popup visibility
#[derive(Debug, Default)]
pub struct HelpState {
    pub visible: bool,
}

impl HelpState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }
}
