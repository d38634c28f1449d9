//! # Free List Configuration
//!
//! Region sizing loaded once at startup from TOML.
//!
//! ```toml
//! total_size = 67108864
//! ```

use serde::{Deserialize, Serialize};

use crate::block::FreeListBlock;
use crate::error::{FreeListError, FreeListResult};
use crate::layout::FreeListLayout;

/// Configuration for one managed region.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FreeListConfig {
    /// Size of the region in bytes.
    pub total_size: u64,
}

impl FreeListConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> FreeListResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| FreeListError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration back to TOML.
    pub fn to_toml_string(&self) -> FreeListResult<String> {
        toml::to_string(self).map_err(|e| FreeListError::InvalidConfig(e.to_string()))
    }

    /// Checks that the region can hold at least one track record.
    pub fn validate(&self) -> FreeListResult<()> {
        if self.layout().capacity() == 0 {
            return Err(FreeListError::InvalidConfig(format!(
                "total_size {} is too small to track",
                self.total_size
            )));
        }
        Ok(())
    }

    /// Bookkeeping layout for the configured region.
    #[must_use]
    pub const fn layout(&self) -> FreeListLayout {
        FreeListLayout::for_region(self.total_size)
    }

    /// Allocates an owned backing block for the configured region.
    pub fn allocate_block(&self) -> FreeListResult<FreeListBlock> {
        FreeListBlock::for_layout(&self.layout())
    }
}
