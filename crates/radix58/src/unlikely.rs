#[cold]
fn cold() {}

/// Branch-prediction hint for paths that are almost never taken, built
/// from a `#[cold]` call since the intrinsic is unstable.
#[inline(always)]
pub(crate) fn unlikely(b: bool) -> bool {
    if b {
        cold()
    }
    b
}
