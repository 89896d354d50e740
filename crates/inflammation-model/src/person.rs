/// A named participant in a study.
///
/// Patients and doctors implement this independently; their `Display`
/// output is exactly [`Person::name`].
pub trait Person {
    fn name(&self) -> &str;
}
