use filestore_core::{FileRecord, FileValidationError};

#[test]
fn new_record_starts_unpersisted() {
    let record = FileRecord::new("/folder", "profile-picture", ".jpg");

    assert_eq!(record.id, None);
    assert!(!record.is_persisted());
    assert_eq!(record.folder_path, "/folder");
    assert_eq!(record.name, "profile-picture");
    assert_eq!(record.file_type, ".jpg");
}

#[test]
fn validate_accepts_well_formed_record() {
    let record = FileRecord::new("/folder", "profile-picture", ".jpg");
    assert!(record.validate().is_ok());
}

#[test]
fn validate_accepts_any_folder_path_and_name_strings() {
    // The store does not interpret path or name; empty strings persist as-is.
    assert!(FileRecord::new("", "picture", ".jpg").validate().is_ok());
    assert!(FileRecord::new("/folder", "", ".jpg").validate().is_ok());
}

#[test]
fn validate_rejects_malformed_file_type() {
    for bad in ["jpg", ".", ""] {
        let record = FileRecord::new("/folder", "picture", bad);
        assert_eq!(
            record.validate().unwrap_err(),
            FileValidationError::InvalidFileType(bad.to_string()),
            "file_type `{bad}` should be rejected"
        );
    }
}

#[test]
fn serialization_uses_camel_case_wire_fields() {
    let mut record = FileRecord::new("/folder", "profile-picture", ".jpg");
    record.id = Some(1);

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["id"], 1);
    assert_eq!(json["folderPath"], "/folder");
    assert_eq!(json["name"], "profile-picture");
    assert_eq!(json["fileType"], ".jpg");

    let decoded: FileRecord = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn deserialization_without_id_yields_new_record() {
    let decoded: FileRecord = serde_json::from_value(serde_json::json!({
        "folderPath": "/folder",
        "name": "profile-picture",
        "fileType": ".jpg",
    }))
    .unwrap();

    assert_eq!(decoded.id, None);
    assert!(!decoded.is_persisted());
}
