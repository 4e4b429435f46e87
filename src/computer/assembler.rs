use super::{Computer, ComputerBuilder};

/// Runs a fixed build sequence against any [`ComputerBuilder`] without
/// knowing which variant it was handed.
pub struct ComputerAssembler;

impl ComputerAssembler {
    pub fn assemble_computer<B: ComputerBuilder>(&self, builder: &mut B) -> Computer {
        log::info!("Assembling standard computer");
        builder.build_cpu("Intel i7");
        builder.build_memory("16GB");
        builder.build_storage("512GB SSD");
        builder.result()
    }

    pub fn assemble_laptop<B: ComputerBuilder>(&self, builder: &mut B) -> Computer {
        log::info!("Assembling laptop");
        builder.build_cpu("Ryzen 9");
        // Memory modules stack instead of replacing each other.
        builder.build_memory("21GB");
        builder.build_memory("16GB");
        builder.build_memory("1212GB");
        builder.build_storage("Dysk Tysionc!");
        builder.result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::computer::{DesktopComputerBuilder, LaptopComputerBuilder};

    #[test]
    fn assemble_computer_on_fresh_desktop_builder() {
        let mut builder = DesktopComputerBuilder::new();
        let computer = ComputerAssembler.assemble_computer(&mut builder);
        assert_eq!(computer.kind(), "Desktop");
        assert_eq!(computer.cpu(), "Intel i7");
        assert_eq!(computer.memory(), &["16GB"]);
        assert_eq!(computer.storage(), "512GB SSD");
    }

    #[test]
    fn assemble_laptop_on_fresh_laptop_builder() {
        let mut builder = LaptopComputerBuilder::new();
        let computer = ComputerAssembler.assemble_laptop(&mut builder);
        assert_eq!(computer.kind(), "Laptop");
        assert_eq!(computer.cpu(), "Ryzen 9");
        assert_eq!(computer.memory(), &["21GB", "16GB", "1212GB"]);
        assert_eq!(computer.storage(), "Dysk Tysionc!");
    }

    #[test]
    fn same_sequence_on_different_variants_differs_only_in_kind() {
        let mut desktop_builder = DesktopComputerBuilder::new();
        let mut laptop_builder = LaptopComputerBuilder::new();
        let desktop = ComputerAssembler.assemble_computer(&mut desktop_builder);
        let laptop = ComputerAssembler.assemble_computer(&mut laptop_builder);
        assert_eq!(desktop.kind(), "Desktop");
        assert_eq!(laptop.kind(), "Laptop");
        assert_eq!(desktop.cpu(), laptop.cpu());
        assert_eq!(desktop.memory(), laptop.memory());
        assert_eq!(desktop.storage(), laptop.storage());
    }
}
