//! kubeseal-encrypt - seal a single Kubernetes secret value.
//!
//! Writes a plain `Secret` manifest for one key, runs it through `kubeseal`,
//! pulls the encrypted value out of the result and, optionally, applies a
//! throwaway `SealedSecret` to the cluster to prove the controller can
//! decrypt it.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── seal          # Default command: run the pipeline
//! │   ├── prompt        # Terminal confirmation
//! │   ├── output        # Styled terminal output
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # Run configuration and env resolution
//!     ├── locate        # kubectl/kubeseal discovery
//!     ├── process       # External command runner
//!     ├── manifest      # Secret / SealedSecret templates
//!     ├── scratch       # Per-run temp directory
//!     ├── kubeseal      # Sealing client invocation
//!     ├── extract       # Encrypted value extraction
//!     ├── kubectl       # Cluster client invocation
//!     ├── validate      # Live round-trip validation
//!     ├── confirm       # Confirmation trait
//!     └── pipeline      # The whole run
//! ```

pub mod cli;
pub mod core;
pub mod error;
