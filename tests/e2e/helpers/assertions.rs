use serde_json::Value;

pub fn assert_persisted_shape(persisted: &Value) {
    let object = persisted.as_object().expect("Persisted options must be an object");
    assert_eq!(object.len(), 4, "Unexpected keys: {:?}", object.keys().collect::<Vec<_>>());

    for key in ["text", "textType", "voiceId", "outputFormat"] {
        assert!(
            object.get(key).and_then(|v| v.as_str()).is_some(),
            "Missing string value for {}",
            key
        );
    }
}
