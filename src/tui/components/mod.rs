//! # TUI Components
//!
//! All UI components for the terminal interface. Each component file
//! co-locates its props, rendering logic, and tests.
//!
//! Components receive external data as "props" (struct fields), not by
//! reaching into global state. This keeps dependencies explicit and
//! components testable with `ratatui::backend::TestBackend`.
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs      (Top heading line)
//! ├── party_list.rs     (Left column: one row per party)
//! └── party_details.rs  (Right column: selection details + guest list)
//! ```

pub mod party_details;
pub mod party_list;
pub mod title_bar;

pub use party_details::PartyDetails;
pub use party_list::PartyList;
pub use title_bar::TitleBar;
