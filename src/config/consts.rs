// src/config/consts.rs

// Selectors
// Store-locator directory pages (state and city listings) render child
// regions as anchor items; location pages carry a semantic address block.
pub const DIRECTORY_ITEM_SELECTOR: &str = "a.Directory-listLink";
pub const ADDRESS_BLOCK_SELECTOR: &str = "address.c-address";

// The one directory entry with no state abbreviation; dropped, never mapped.
pub const EXCLUDED_STATE: &str = "Puerto Rico";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_ADDRESSES_FILE: &str = "addresses.csv";
pub const DEFAULT_GEOCODED_FILE: &str = "geocoded.csv";
