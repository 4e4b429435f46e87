mod assembler;
mod builder;

pub use assembler::*;
pub use builder::*;

/// A computer assembled part by part.
///
/// Scalar fields keep the last value written to them, memory modules
/// accumulate in the order they were installed.
#[derive(Clone, Debug, Default, PartialEq, Eq, getset::Getters, getset::Setters)]
pub struct Computer {
    #[getset(get = "pub", set = "pub")]
    kind: String,
    #[getset(get = "pub", set = "pub")]
    cpu: String,
    #[getset(get = "pub")]
    memory: Vec<String>,
    #[getset(get = "pub", set = "pub")]
    storage: String,
}

impl Computer {
    pub fn add_memory(&mut self, memory: impl Into<String>) {
        self.memory.push(memory.into());
    }
}

impl std::fmt::Display for Computer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Type: {}", self.kind)?;
        writeln!(f, "CPU: {}", self.cpu)?;
        write!(f, "Memory: ")?;
        for memory in &self.memory {
            write!(f, " {memory}")?;
        }
        writeln!(f)?;
        write!(f, "Storage: {}", self.storage)
    }
}
