use voice_options::{AudioFormat, TextType, VoiceId};

#[test]
fn it_should_parse_every_token_back_to_its_variant() {
    for text_type in TextType::ALL {
        assert_eq!(TextType::from_token(&text_type.to_string()), Some(text_type));
    }
    for format in AudioFormat::ALL {
        assert_eq!(AudioFormat::from_token(&format.to_string()), Some(format));
    }
    for voice in VoiceId::ALL {
        assert_eq!(VoiceId::from_token(&voice.to_string()), Some(voice));
    }
}

#[test]
fn it_should_give_every_voice_a_locale() {
    for voice in VoiceId::ALL {
        let locale = voice.locale();
        assert!(!locale.is_empty());
        assert!(VoiceId::for_locale(locale).contains(&voice));
    }
}

#[test]
fn it_should_list_voices_by_locale_case_insensitively() {
    assert_eq!(
        VoiceId::for_locale("de-de"),
        vec![VoiceId::Hans, VoiceId::Marlene, VoiceId::Vicki]
    );
}
