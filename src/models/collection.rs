use std::fmt;

/// How a seed batch treats records already present in its collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Delete every existing document before inserting.
    Replace,
    /// Insert alongside whatever is already there.
    Append,
}

/// The seven collections of the learner-report database.
///
/// Variants are declared in seeding order; [`Collection::ALL`] preserves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    Administrator,
    Attendance,
    BatchRegistration,
    CareerServiceUser,
    Faculty,
    QuestionUpload,
    Student,
}

impl Collection {
    /// All collections in the order the seeder processes them.
    pub const ALL: [Collection; 7] = [
        Collection::Administrator,
        Collection::Attendance,
        Collection::BatchRegistration,
        Collection::CareerServiceUser,
        Collection::Faculty,
        Collection::QuestionUpload,
        Collection::Student,
    ];

    /// MongoDB collection name, as the backend's models register them.
    pub fn name(self) -> &'static str {
        match self {
            Collection::Administrator => "admins",
            Collection::Attendance => "attendances",
            Collection::BatchRegistration => "batchregistrations",
            Collection::CareerServiceUser => "careerservices",
            Collection::Faculty => "faculties",
            Collection::QuestionUpload => "questionuploads",
            Collection::Student => "students",
        }
    }

    /// Administrators are replaced on every run; everything else is append-only.
    pub fn write_mode(self) -> WriteMode {
        match self {
            Collection::Administrator => WriteMode::Replace,
            _ => WriteMode::Append,
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
