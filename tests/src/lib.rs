//! Integration tests spanning `scanlens-common` and `scanlens-core`.

#[cfg(test)]
mod checks;
#[cfg(test)]
mod summary;
#[cfg(test)]
mod util;
