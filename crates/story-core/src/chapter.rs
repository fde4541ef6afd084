/// The narrative sections, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Chapter {
    Origin,
    Connection,
    Territory,
    Artifacts,
    Resistance,
    Fire,
    Knowledge,
    Cosmology,
    Heroes,
    Celebration,
    Future,
}

impl Chapter {
    pub const ALL: [Chapter; 11] = [
        Chapter::Origin,
        Chapter::Connection,
        Chapter::Territory,
        Chapter::Artifacts,
        Chapter::Resistance,
        Chapter::Fire,
        Chapter::Knowledge,
        Chapter::Cosmology,
        Chapter::Heroes,
        Chapter::Celebration,
        Chapter::Future,
    ];

    pub fn dom_id(self) -> &'static str {
        match self {
            Chapter::Origin => "chapter-origin",
            Chapter::Connection => "chapter-connection",
            Chapter::Territory => "chapter-territory",
            Chapter::Artifacts => "chapter-artifacts",
            Chapter::Resistance => "chapter-resistance",
            Chapter::Fire => "chapter-fire",
            Chapter::Knowledge => "knowledge-stack",
            Chapter::Cosmology => "chapter-cosmology",
            Chapter::Heroes => "chapter-heroes",
            Chapter::Celebration => "chapter-celebration",
            Chapter::Future => "chapter-future",
        }
    }

    pub fn audio_path(self) -> &'static str {
        match self {
            Chapter::Origin => "assets/audio/origin.mp3",
            Chapter::Connection => "assets/audio/connection.mp3",
            Chapter::Territory => "assets/audio/territory.mp3",
            Chapter::Artifacts => "assets/audio/artifacts.mp3",
            Chapter::Resistance => "assets/audio/resistance.mp3",
            Chapter::Fire => "assets/audio/fire.mp3",
            Chapter::Knowledge => "assets/audio/knowledge.mp3",
            Chapter::Cosmology => "assets/audio/cosmology.mp3",
            Chapter::Heroes => "assets/audio/heroes.mp3",
            Chapter::Celebration => "assets/audio/celebration.mp3",
            Chapter::Future => "assets/audio/future.mp3",
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(i: usize) -> Option<Chapter> {
        Self::ALL.get(i).copied()
    }

    pub fn from_dom_id(id: &str) -> Option<Chapter> {
        let id = id.trim_start_matches('#');
        Self::ALL.iter().copied().find(|c| c.dom_id() == id)
    }
}
