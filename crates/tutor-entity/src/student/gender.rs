//! Student gender.

text_enum! {
    /// Self-declared gender of a student.
    Gender {
        /// Male.
        Male => "MALE",
        /// Female.
        Female => "FEMALE",
        /// Other or undisclosed.
        Other => "OTHER",
    }
}
