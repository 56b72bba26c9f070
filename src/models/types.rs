use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An administrator account. `password` holds the SHA-256 hex of the plaintext.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Administrator {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Attendance mark for a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

/// One attendance entry for a student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    pub student_id: String,
    /// Stored as a native BSON datetime rather than a string.
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub date: DateTime<Utc>,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRegistration {
    pub batch_name: String,
    pub year: i32,
}

/// A career-service staff account.
///
/// Unlike [`Administrator`], the password here is a plaintext placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerServiceUser {
    pub username: String,
    pub email: String,
    pub fullname: String,
    pub phone_no: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faculty {
    pub name: String,
    pub email: String,
    pub department: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionUpload {
    pub question: String,
    pub subject: String,
    pub uploaded_by: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub name: String,
    pub email: String,
    pub roll_no: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::Bson;
    use chrono::TimeZone;

    #[test]
    fn test_field_names_match_backend_schema() {
        let user = CareerServiceUser {
            username: "csuser1".to_string(),
            email: "cs1@example.com".to_string(),
            fullname: "Career Service 1".to_string(),
            phone_no: "1234567890".to_string(),
            password: "dummyhash1".to_string(),
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["phoneNo"], "1234567890");
        assert_eq!(value["fullname"], "Career Service 1");
        assert!(value.get("phone_no").is_none());

        let upload = QuestionUpload {
            question: "Explain HTTP.".to_string(),
            subject: "CS".to_string(),
            uploaded_by: "Dr. Smith".to_string(),
        };
        assert_eq!(serde_json::to_value(&upload).unwrap()["uploadedBy"], "Dr. Smith");
    }

    #[test]
    fn test_attendance_serializes_date_as_bson_datetime() {
        let date = Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap();
        let attendance = Attendance {
            student_id: "student1".to_string(),
            date,
            status: AttendanceStatus::Present,
        };
        let document = bson::to_document(&attendance).unwrap();

        assert_eq!(document.get_str("studentId").unwrap(), "student1");
        assert_eq!(document.get_str("status").unwrap(), "Present");
        match document.get("date") {
            Some(Bson::DateTime(dt)) => assert_eq!(dt.timestamp_millis(), date.timestamp_millis()),
            other => panic!("expected a BSON datetime, got {:?}", other),
        }
    }

    #[test]
    fn test_batch_year_is_int32() {
        let batch = BatchRegistration {
            batch_name: "Batch A".to_string(),
            year: 2025,
        };
        let document = bson::to_document(&batch).unwrap();
        assert_eq!(document.get_i32("year").unwrap(), 2025);
        assert_eq!(document.get_str("batchName").unwrap(), "Batch A");
    }
}
