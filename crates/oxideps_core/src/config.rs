use clap::Args;
use log::{debug, trace};
use serde::Deserialize;
use std::{fs, path::Path};

use crate::error::{Error, Result};

/// Switches that change which constructs count as dependencies.
///
/// Everything defaults to off. Config files use camelCase keys, e.g.
/// `{"skipTypeImports": true, "mixedImports": true}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Args, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Skip `import type` declarations and `import("x").T` type references
    #[arg(long)]
    pub skip_type_imports: bool,

    /// Skip dynamic `import()` expressions
    #[arg(long)]
    pub skip_async_imports: bool,

    /// Also report CommonJS `require()` calls
    #[arg(long)]
    pub mixed_imports: bool,

    /// Parse JSX/TSX syntax
    #[arg(long)]
    pub jsx: bool,
}

impl Options {
    /// Options with JSX parsing forced on.
    pub fn with_jsx(self) -> Self {
        Self { jsx: true, ..self }
    }

    /// Combine two option sets; a switch is on if either side turns it on.
    pub fn merge(self, other: Options) -> Self {
        Self {
            skip_type_imports: self.skip_type_imports || other.skip_type_imports,
            skip_async_imports: self.skip_async_imports || other.skip_async_imports,
            mixed_imports: self.mixed_imports || other.mixed_imports,
            jsx: self.jsx || other.jsx,
        }
    }

    /// Load options from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        debug!("Reading options from: {:?}", path);
        let content = fs::read_to_string(path)
            .map_err(|source| Error::Read { path: path.to_path_buf(), source })?;
        let options: Options = serde_json::from_str(&content)
            .map_err(|source| Error::Config { path: path.to_path_buf(), source })?;
        trace!("Loaded options: {:?}", options);
        Ok(options)
    }
}
