//! End-to-end pipeline tests: discovery through dispatch.
