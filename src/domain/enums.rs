/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    List,
    Adding,
    Editing,
    Help,
    Settings,
}

impl UiMode {
    /// Modes where keystrokes go to the line editor
    pub fn is_typing(&self) -> bool {
        matches!(self, Self::Adding | Self::Editing)
    }
}

/// Which of the two task files is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageLocation {
    /// File in the current working directory
    Project,
    /// File in the user's home directory
    Global,
}

impl StorageLocation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Project => "Project",
            Self::Global => "Global",
        }
    }

    pub fn all() -> &'static [StorageLocation] {
        &[StorageLocation::Project, StorageLocation::Global]
    }

    pub fn other(&self) -> Self {
        match self {
            Self::Project => Self::Global,
            Self::Global => Self::Project,
        }
    }
}

/// Severity of a transient notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}
