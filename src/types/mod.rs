/// `Display` through the type's `as_str` table, so printed names and
/// serialized names come from one place.
macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

pub mod config;
pub mod finding;
pub mod report;
pub mod stats;
