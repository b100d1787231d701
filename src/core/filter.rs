//! Formation filter: programs requiring every kept subject

use super::models::Program;

/// Keep programs requiring ALL of `keep`, sorted by applicant count descending
///
/// The sort is stable, so programs with equal applicant counts keep their input
/// order. No match yields an empty vector. An empty `keep` matches every program.
/// Running the filter again on its own output with the same `keep` returns the
/// same programs in the same order.
#[must_use]
pub fn filter_programs<'a, I, S>(programs: I, keep: &[S]) -> Vec<&'a Program>
where
    I: IntoIterator<Item = &'a Program>,
    S: AsRef<str>,
{
    let mut matches: Vec<&Program> = programs
        .into_iter()
        .filter(|p| p.requires_all(keep))
        .collect();
    matches.sort_by(|a, b| b.applicants.cmp(&a.applicants));
    matches
}
