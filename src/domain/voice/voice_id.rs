use serde::{Deserialize, Serialize};

/// Synthetic voices offered by the speech service.
///
/// Voices are specific to a locale, see [`VoiceId::locale`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceId {
    // en-US
    Ivy,
    #[default]
    Joanna,
    Joey,
    Justin,
    Kendra,
    Kimberly,
    Salli,
    Matthew,
    // en-AU
    Nicole,
    Russell,
    // en-GB
    Amy,
    Brian,
    Emma,
    // en-IN
    Raveena,
    Aditi,
    // en-GB-WLS
    Geraint,
    // cy-GB
    Gwyneth,
    // fr-CA
    Chantal,
    // fr-FR
    Celine,
    Lea,
    Mathieu,
    // de-DE
    Hans,
    Marlene,
    Vicki,
    // is-IS
    Karl,
    Dora,
    // it-IT
    Carla,
    Giorgio,
    Bianca,
    // ja-JP
    Mizuki,
    Takumi,
    // ko-KR
    Seoyeon,
    // nb-NO
    Liv,
    // nl-NL
    Lotte,
    Ruben,
    // pl-PL
    Ewa,
    Jacek,
    Jan,
    Maja,
    // pt-BR
    Ricardo,
    Vitoria,
    // pt-PT
    Cristiano,
    Ines,
    // ro-RO
    Carmen,
    // ru-RU
    Maxim,
    Tatyana,
    // es-ES
    Conchita,
    Enrique,
    Lucia,
    // es-US
    Miguel,
    Penelope,
    Lupe,
    // es-MX
    Mia,
    // sv-SE
    Astrid,
    // tr-TR
    Filiz,
    // cmn-CN
    Zhiyu,
    // arb
    Zeina,
}

impl VoiceId {
    pub const ALL: [VoiceId; 57] = [
        VoiceId::Ivy,
        VoiceId::Joanna,
        VoiceId::Joey,
        VoiceId::Justin,
        VoiceId::Kendra,
        VoiceId::Kimberly,
        VoiceId::Salli,
        VoiceId::Matthew,
        VoiceId::Nicole,
        VoiceId::Russell,
        VoiceId::Amy,
        VoiceId::Brian,
        VoiceId::Emma,
        VoiceId::Raveena,
        VoiceId::Aditi,
        VoiceId::Geraint,
        VoiceId::Gwyneth,
        VoiceId::Chantal,
        VoiceId::Celine,
        VoiceId::Lea,
        VoiceId::Mathieu,
        VoiceId::Hans,
        VoiceId::Marlene,
        VoiceId::Vicki,
        VoiceId::Karl,
        VoiceId::Dora,
        VoiceId::Carla,
        VoiceId::Giorgio,
        VoiceId::Bianca,
        VoiceId::Mizuki,
        VoiceId::Takumi,
        VoiceId::Seoyeon,
        VoiceId::Liv,
        VoiceId::Lotte,
        VoiceId::Ruben,
        VoiceId::Ewa,
        VoiceId::Jacek,
        VoiceId::Jan,
        VoiceId::Maja,
        VoiceId::Ricardo,
        VoiceId::Vitoria,
        VoiceId::Cristiano,
        VoiceId::Ines,
        VoiceId::Carmen,
        VoiceId::Maxim,
        VoiceId::Tatyana,
        VoiceId::Conchita,
        VoiceId::Enrique,
        VoiceId::Lucia,
        VoiceId::Miguel,
        VoiceId::Penelope,
        VoiceId::Lupe,
        VoiceId::Mia,
        VoiceId::Astrid,
        VoiceId::Filiz,
        VoiceId::Zhiyu,
        VoiceId::Zeina,
    ];

    /// Canonical token used in persisted options and request URLs
    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceId::Ivy => "ivy",
            VoiceId::Joanna => "joanna",
            VoiceId::Joey => "joey",
            VoiceId::Justin => "justin",
            VoiceId::Kendra => "kendra",
            VoiceId::Kimberly => "kimberly",
            VoiceId::Salli => "salli",
            VoiceId::Matthew => "matthew",
            VoiceId::Nicole => "nicole",
            VoiceId::Russell => "russell",
            VoiceId::Amy => "amy",
            VoiceId::Brian => "brian",
            VoiceId::Emma => "emma",
            VoiceId::Raveena => "raveena",
            VoiceId::Aditi => "aditi",
            VoiceId::Geraint => "geraint",
            VoiceId::Gwyneth => "gwyneth",
            VoiceId::Chantal => "chantal",
            VoiceId::Celine => "celine",
            VoiceId::Lea => "lea",
            VoiceId::Mathieu => "mathieu",
            VoiceId::Hans => "hans",
            VoiceId::Marlene => "marlene",
            VoiceId::Vicki => "vicki",
            VoiceId::Karl => "karl",
            VoiceId::Dora => "dora",
            VoiceId::Carla => "carla",
            VoiceId::Giorgio => "giorgio",
            VoiceId::Bianca => "bianca",
            VoiceId::Mizuki => "mizuki",
            VoiceId::Takumi => "takumi",
            VoiceId::Seoyeon => "seoyeon",
            VoiceId::Liv => "liv",
            VoiceId::Lotte => "lotte",
            VoiceId::Ruben => "ruben",
            VoiceId::Ewa => "ewa",
            VoiceId::Jacek => "jacek",
            VoiceId::Jan => "jan",
            VoiceId::Maja => "maja",
            VoiceId::Ricardo => "ricardo",
            VoiceId::Vitoria => "vitoria",
            VoiceId::Cristiano => "cristiano",
            VoiceId::Ines => "ines",
            VoiceId::Carmen => "carmen",
            VoiceId::Maxim => "maxim",
            VoiceId::Tatyana => "tatyana",
            VoiceId::Conchita => "conchita",
            VoiceId::Enrique => "enrique",
            VoiceId::Lucia => "lucia",
            VoiceId::Miguel => "miguel",
            VoiceId::Penelope => "penelope",
            VoiceId::Lupe => "lupe",
            VoiceId::Mia => "mia",
            VoiceId::Astrid => "astrid",
            VoiceId::Filiz => "filiz",
            VoiceId::Zhiyu => "zhiyu",
            VoiceId::Zeina => "zeina",
        }
    }

    /// Exact, case-sensitive lookup. Unknown tokens yield `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|voice| voice.as_str() == token)
    }

    /// BCP-47 locale the voice speaks
    pub fn locale(&self) -> &'static str {
        match self {
            VoiceId::Ivy
            | VoiceId::Joanna
            | VoiceId::Joey
            | VoiceId::Justin
            | VoiceId::Kendra
            | VoiceId::Kimberly
            | VoiceId::Salli
            | VoiceId::Matthew => "en-US",
            VoiceId::Nicole | VoiceId::Russell => "en-AU",
            VoiceId::Amy | VoiceId::Brian | VoiceId::Emma => "en-GB",
            VoiceId::Raveena | VoiceId::Aditi => "en-IN",
            VoiceId::Geraint => "en-GB-WLS",
            VoiceId::Gwyneth => "cy-GB",
            VoiceId::Chantal => "fr-CA",
            VoiceId::Celine | VoiceId::Lea | VoiceId::Mathieu => "fr-FR",
            VoiceId::Hans | VoiceId::Marlene | VoiceId::Vicki => "de-DE",
            VoiceId::Karl | VoiceId::Dora => "is-IS",
            VoiceId::Carla | VoiceId::Giorgio | VoiceId::Bianca => "it-IT",
            VoiceId::Mizuki | VoiceId::Takumi => "ja-JP",
            VoiceId::Seoyeon => "ko-KR",
            VoiceId::Liv => "nb-NO",
            VoiceId::Lotte | VoiceId::Ruben => "nl-NL",
            VoiceId::Ewa | VoiceId::Jacek | VoiceId::Jan | VoiceId::Maja => "pl-PL",
            VoiceId::Ricardo | VoiceId::Vitoria => "pt-BR",
            VoiceId::Cristiano | VoiceId::Ines => "pt-PT",
            VoiceId::Carmen => "ro-RO",
            VoiceId::Maxim | VoiceId::Tatyana => "ru-RU",
            VoiceId::Conchita | VoiceId::Enrique | VoiceId::Lucia => "es-ES",
            VoiceId::Miguel | VoiceId::Penelope | VoiceId::Lupe => "es-US",
            VoiceId::Mia => "es-MX",
            VoiceId::Astrid => "sv-SE",
            VoiceId::Filiz => "tr-TR",
            VoiceId::Zhiyu => "cmn-CN",
            VoiceId::Zeina => "arb",
        }
    }

    /// All voices speaking the given locale
    pub fn for_locale(locale: &str) -> Vec<VoiceId> {
        Self::ALL
            .iter()
            .copied()
            .filter(|voice| voice.locale().eq_ignore_ascii_case(locale))
            .collect()
    }
}

impl std::fmt::Display for VoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
