//! Test-only workspace member; the behavioral suites live under `tests/`.
