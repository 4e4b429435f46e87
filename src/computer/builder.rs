use super::Computer;

/// Stepwise construction of a [`Computer`]. Values for each part come from
/// the caller, the variant only fixes the machine type.
pub trait ComputerBuilder {
    fn build_cpu(&mut self, cpu: &str);
    fn build_memory(&mut self, memory: &str);
    fn build_storage(&mut self, storage: &str);
    /// Copy of the computer built so far.
    fn result(&self) -> Computer;
}

pub struct DesktopComputerBuilder {
    computer: Computer,
}

impl DesktopComputerBuilder {
    pub fn new() -> Self {
        let mut computer = Computer::default();
        computer.set_kind("Desktop".into());
        Self { computer }
    }
}

impl Default for DesktopComputerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ComputerBuilder for DesktopComputerBuilder {
    fn build_cpu(&mut self, cpu: &str) {
        self.computer.set_cpu(cpu.into());
    }

    fn build_memory(&mut self, memory: &str) {
        self.computer.add_memory(memory);
    }

    fn build_storage(&mut self, storage: &str) {
        self.computer.set_storage(storage.into());
    }

    fn result(&self) -> Computer {
        self.computer.clone()
    }
}

pub struct LaptopComputerBuilder {
    computer: Computer,
}

impl LaptopComputerBuilder {
    pub fn new() -> Self {
        let mut computer = Computer::default();
        computer.set_kind("Laptop".into());
        Self { computer }
    }
}

impl Default for LaptopComputerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ComputerBuilder for LaptopComputerBuilder {
    fn build_cpu(&mut self, cpu: &str) {
        self.computer.set_cpu(cpu.into());
    }

    fn build_memory(&mut self, memory: &str) {
        self.computer.add_memory(memory);
    }

    fn build_storage(&mut self, storage: &str) {
        self.computer.set_storage(storage.into());
    }

    fn result(&self) -> Computer {
        self.computer.clone()
    }
}
