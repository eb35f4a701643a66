//! Seeding from a pattern name.

use std::ffi::{c_char, CStr};

use crate::automaton::{Engine, SeedPattern};

/// Writes a named seed pattern into the current generation.
///
/// Known names: `stable`, `guns`, `random`, `clown`, `diehard`. A null or
/// unknown name seeds the default (`guns`).
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine
/// - `name` must be null or a valid NUL-terminated string
///
/// # Returns
/// 0 if the named pattern was used, 1 if the default was substituted, -1 on null engine.
#[no_mangle]
pub unsafe extern "C" fn tl_seed(ptr: *mut Engine, name: *const c_char) -> i32 {
    if ptr.is_null() {
        return -1;
    }

    let name = if name.is_null() {
        None
    } else {
        match CStr::from_ptr(name).to_str() {
            Ok(name) => Some(name),
            Err(err) => {
                tracing::warn!(%err, "pattern name is not UTF-8, using default");
                None
            }
        }
    };
    let known = name.is_some_and(|n| n.parse::<SeedPattern>().is_ok());

    (*ptr).seed(SeedPattern::resolve(name));
    if known {
        0
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::lifecycle;
    use std::ptr;

    #[test]
    fn test_seed_by_name() {
        unsafe {
            let engine = lifecycle::tl_create(12, 4, 1);

            assert_eq!(tl_seed(engine, c"clown".as_ptr()), 0);
            assert_eq!((*engine).grid().population(), 7);

            lifecycle::tl_destroy(engine);
        }
    }

    #[test]
    fn test_seed_falls_back_to_guns() {
        unsafe {
            let engine = lifecycle::tl_create(128, 4, 1);

            assert_eq!(tl_seed(engine, c"spaceship".as_ptr()), 1);
            assert_eq!((*engine).grid().population(), 4 * 36);

            assert_eq!(tl_seed(engine, ptr::null()), 1);
            assert_eq!((*engine).grid().population(), 4 * 36);

            lifecycle::tl_destroy(engine);
        }
    }

    #[test]
    fn test_seed_non_utf8_name_uses_default() {
        unsafe {
            let engine = lifecycle::tl_create(128, 4, 1);
            let name = [0xFFu8, 0xFE, 0x00];

            assert_eq!(tl_seed(engine, name.as_ptr() as *const c_char), 1);
            assert_eq!((*engine).grid().population(), 4 * 36);

            lifecycle::tl_destroy(engine);
        }
    }

    #[test]
    fn test_seed_null_engine() {
        unsafe {
            assert_eq!(tl_seed(ptr::null_mut(), c"guns".as_ptr()), -1);
        }
    }
}
