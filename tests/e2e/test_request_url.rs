use crate::e2e::helpers;

use helpers::ssml_options;
use pretty_assertions::assert_eq;
use voice_options::infrastructure::http::SpeakRequest;
use voice_options::RequestOptions;

#[test]
fn it_should_build_path_from_text() {
    let options = RequestOptions::new("a b/c?d");
    assert_eq!(options.path().unwrap(), "voice/v1/speak/a%20b%2Fc%3Fd");
}

#[test]
fn it_should_keep_query_parameters_in_order() {
    let options = RequestOptions::new("x");
    let names: Vec<&str> = options.query_parameters().iter().map(|(name, _)| *name).collect();
    assert_eq!(names, vec!["textType", "voiceId", "outputFormat"]);
}

#[test]
fn it_should_build_full_url_for_ssml() {
    let request = SpeakRequest::new("https://api.example.com/");
    let url = request.url_for(&ssml_options()).unwrap();

    assert_eq!(
        url,
        "https://api.example.com/voice/v1/speak/%3Cspeak%3EIn%20%3Cbreak%20time%3D%221s%22%2F%3E%20500%20feet%3C%2Fspeak%3E?textType=ssml&voiceId=matthew&outputFormat=ogg_vorbis"
    );
}

#[test]
fn it_should_reflect_field_changes_in_url() {
    let request = SpeakRequest::new("https://api.example.com");
    let mut options = RequestOptions::new("hola");
    let before = request.url_for(&options).unwrap();

    options.voice_id = voice_options::VoiceId::Lupe;
    let after = request.url_for(&options).unwrap();

    assert!(before.contains("voiceId=joanna"));
    assert!(after.contains("voiceId=lupe"));
}
