use std::cmp::Ordering;

use crate::errors::GowrapError;

const MAX_COMPONENTS: usize = 3;

/// Checks `version` against `<major>[.<minor>[.<patch>]]`.
pub fn is_valid(version: &str) -> bool {
    let mut count = 0;
    for component in version.split('.') {
        count += 1;
        if count > MAX_COMPONENTS
            || component.is_empty()
            || !component.bytes().all(|b| b.is_ascii_digit())
        {
            return false;
        }
    }

    count > 0
}

// Components may be longer than any integer type, so compare by magnitude
// after dropping leading zeros.
fn compare_component(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');

    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Returns true when `a` is strictly older than `b`.
///
/// Both versions must already pass [`is_valid`]. A missing trailing component
/// is older than any explicit one, so `1.2` is older than `1.2.0`.
pub fn is_older(a: &str, b: &str) -> bool {
    let mut a_components = a.split('.');
    let mut b_components = b.split('.');

    loop {
        match (a_components.next(), b_components.next()) {
            (None, None) => return false,
            (None, Some(_)) => return true,
            (Some(_), None) => return false,
            (Some(a_comp), Some(b_comp)) => match compare_component(a_comp, b_comp) {
                Ordering::Less => return true,
                Ordering::Greater => return false,
                Ordering::Equal => {}
            },
        }
    }
}

/// Total order over valid versions, consistent with [`is_older`].
pub fn compare(a: &str, b: &str) -> Ordering {
    if is_older(a, b) {
        Ordering::Less
    } else if is_older(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

fn validate_all<S: AsRef<str>>(versions: &[S]) -> Result<(), GowrapError> {
    match versions.iter().map(|f| f.as_ref()).find(|f| !is_valid(f)) {
        Some(invalid) => Err(GowrapError::InvalidVersion(invalid.to_string())),
        None => Ok(()),
    }
}

/// Validates every entry of `versions` and returns a comparator for
/// [`slice::sort_by`], which is stable.
///
/// Fails with the first invalid entry, in slice order.
pub fn slice_stable_comparator_for<S: AsRef<str>>(
    versions: &[S],
) -> Result<impl Fn(&S, &S) -> Ordering + use<S>, GowrapError> {
    validate_all(versions)?;

    Ok(|a: &S, b: &S| compare(a.as_ref(), b.as_ref()))
}

/// Index form of [`slice_stable_comparator_for`]: `p(i, j)` is true when
/// `versions[i]` orders before `versions[j]`.
pub fn slice_stable_index_comparator_for<S: AsRef<str>>(
    versions: &[S],
) -> Result<impl Fn(usize, usize) -> bool + '_, GowrapError> {
    validate_all(versions)?;

    Ok(move |i: usize, j: usize| is_older(versions[i].as_ref(), versions[j].as_ref()))
}

/// Sorts `versions` ascending in place. On error the slice is left untouched.
pub fn sort_versions<S: AsRef<str>>(versions: &mut [S]) -> Result<(), GowrapError> {
    let comparator = slice_stable_comparator_for(versions)?;
    versions.sort_by(comparator);

    Ok(())
}

/// Greatest version in `versions`. Among equal greatest entries the last one wins.
pub fn latest<S: AsRef<str>>(versions: &[S]) -> Result<Option<&S>, GowrapError> {
    let comparator = slice_stable_comparator_for(versions)?;

    Ok(versions.iter().max_by(|a, b| comparator(*a, *b)))
}
