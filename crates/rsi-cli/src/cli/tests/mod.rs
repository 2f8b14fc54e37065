//! CLI and Actions host tests (split per concern).
