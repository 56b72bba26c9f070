use super::types::SeedBatch;
use crate::models::{
    Administrator, Attendance, AttendanceStatus, BatchRegistration, CareerServiceUser, Collection,
    Faculty, QuestionUpload, Student,
};
use anyhow::{Context, Result as AnyhowResult};
use bson::Document;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Builds the ordered seed plan for all seven collections.
///
/// Every batch holds exactly two documents. Attendance records share the single
/// timestamp passed in, so a plan built once is stable across retries of the same run.
///
/// # Arguments
///
/// * `now` - Timestamp written into the attendance `date` field.
///
/// # Returns
///
/// * `Ok(Vec<SeedBatch>)` - One batch per collection, in [`Collection::ALL`] order.
/// * `Err(anyhow::Error)` - A record could not be serialized to BSON.
///
/// # Examples
///
/// ```rust
/// use learner_report_seed::seed::seed_plan;
///
/// let plan = seed_plan(chrono::Utc::now()).unwrap();
/// assert_eq!(plan.len(), 7);
/// assert!(plan.iter().all(|batch| batch.documents.len() == 2));
/// ```
pub fn seed_plan(now: DateTime<Utc>) -> AnyhowResult<Vec<SeedBatch>> {
    Collection::ALL
        .iter()
        .map(|&collection| -> AnyhowResult<SeedBatch> {
            let documents = documents_for(collection, now)
                .context(format!("Failed to build records for {}", collection))?;
            Ok(SeedBatch {
                collection,
                mode: collection.write_mode(),
                documents,
            })
        })
        .collect()
}

fn documents_for(collection: Collection, now: DateTime<Utc>) -> AnyhowResult<Vec<Document>> {
    match collection {
        Collection::Administrator => to_documents(&administrators()),
        Collection::Attendance => to_documents(&attendance(now)),
        Collection::BatchRegistration => to_documents(&batch_registrations()),
        Collection::CareerServiceUser => to_documents(&career_service_users()),
        Collection::Faculty => to_documents(&faculty()),
        Collection::QuestionUpload => to_documents(&question_uploads()),
        Collection::Student => to_documents(&students()),
    }
}

fn to_documents<T: Serialize>(records: &[T]) -> AnyhowResult<Vec<Document>> {
    records
        .iter()
        .map(|record| bson::to_document(record).context("Failed to serialize record"))
        .collect()
}

// Passwords are precomputed SHA-256 digests; admin2's is the hash of "dummyhash2".
fn administrators() -> [Administrator; 2] {
    [
        Administrator {
            username: "admin1".to_string(),
            email: "admin1@example.com".to_string(),
            password: "462e2076f43fd022d4a83de32da9bba9d37330975b8b88a751cc374f6a8afa43".to_string(),
        },
        Administrator {
            username: "admin2".to_string(),
            email: "admin2@example.com".to_string(),
            password: "869faf06a22b24b1746720cf2a7cb73264d4deece8b7c14c608b6a45fbf12aca".to_string(),
        },
    ]
}

fn attendance(now: DateTime<Utc>) -> [Attendance; 2] {
    [
        Attendance {
            student_id: "student1".to_string(),
            date: now,
            status: AttendanceStatus::Present,
        },
        Attendance {
            student_id: "student2".to_string(),
            date: now,
            status: AttendanceStatus::Absent,
        },
    ]
}

fn batch_registrations() -> [BatchRegistration; 2] {
    [
        BatchRegistration {
            batch_name: "Batch A".to_string(),
            year: 2025,
        },
        BatchRegistration {
            batch_name: "Batch B".to_string(),
            year: 2025,
        },
    ]
}

fn career_service_users() -> [CareerServiceUser; 2] {
    [
        CareerServiceUser {
            username: "csuser1".to_string(),
            email: "cs1@example.com".to_string(),
            fullname: "Career Service 1".to_string(),
            phone_no: "1234567890".to_string(),
            password: "dummyhash1".to_string(),
        },
        CareerServiceUser {
            username: "csuser2".to_string(),
            email: "cs2@example.com".to_string(),
            fullname: "Career Service 2".to_string(),
            phone_no: "0987654321".to_string(),
            password: "dummyhash2".to_string(),
        },
    ]
}

fn faculty() -> [Faculty; 2] {
    [
        Faculty {
            name: "Dr. Smith".to_string(),
            email: "smith@univ.edu".to_string(),
            department: "CS".to_string(),
        },
        Faculty {
            name: "Dr. Jane".to_string(),
            email: "jane@univ.edu".to_string(),
            department: "Math".to_string(),
        },
    ]
}

fn question_uploads() -> [QuestionUpload; 2] {
    [
        QuestionUpload {
            question: "What is 2+2?".to_string(),
            subject: "Math".to_string(),
            uploaded_by: "Dr. Jane".to_string(),
        },
        QuestionUpload {
            question: "Explain HTTP.".to_string(),
            subject: "CS".to_string(),
            uploaded_by: "Dr. Smith".to_string(),
        },
    ]
}

fn students() -> [Student; 2] {
    [
        Student {
            name: "Student One".to_string(),
            email: "student1@univ.edu".to_string(),
            roll_no: "S001".to_string(),
        },
        Student {
            name: "Student Two".to_string(),
            email: "student2@univ.edu".to_string(),
            roll_no: "S002".to_string(),
        },
    ]
}
