//! Story definitions and prompt assembly

use crate::bubble::anchor::Placement;
use crate::story::characters::CastMember;

/// Negative prompt used by the two-page book
pub const BOOK_NEGATIVE_PROMPT: &str = "realistic, photo, 3d render, complex, detailed shading, gradient, dark, violent, scary, many characters, crowd";
/// Negative prompt used by the four-panel strip
pub const STRIP_NEGATIVE_PROMPT: &str = "realistic, photo, 3d, dark, complex";
/// Style suffix appended to every panel prompt
pub const STYLE_SUFFIX: &str = "cartoon comic style, simple lines, flat colors, white background";

/// How panel prompts establish character appearance
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptMode {
    /// Inline the speaker's full prompt fragment plus the partner's description
    References,
    /// Lead with the speaker's trigger word and short description
    TriggerWord,
}

/// One panel of a story: scene, dialogue, placement, and cast
#[derive(Clone, Copy, Debug)]
pub struct PanelScript {
    /// Scene description fed to the generation backend
    pub scene: &'static str,
    /// Dialogue rendered into the speech bubble
    pub dialogue: &'static str,
    /// Bubble anchor position
    pub placement: Placement,
    /// Speaking character
    pub speaker: CastMember,
    /// Optional second character in the scene
    pub partner: Option<CastMember>,
}

impl PanelScript {
    /// Assemble the full generation prompt for this panel
    pub fn prompt(&self, mode: PromptMode) -> String {
        let speaker = self.speaker.reference();
        match mode {
            PromptMode::References => match self.partner {
                Some(partner) => format!(
                    "{}, {}, {}, {STYLE_SUFFIX}",
                    speaker.full_prompt,
                    partner.reference().description,
                    self.scene
                ),
                None => format!("{}, {}, {STYLE_SUFFIX}", speaker.full_prompt, self.scene),
            },
            PromptMode::TriggerWord => format!(
                "{} {}, {}, {STYLE_SUFFIX}",
                speaker.trigger_word, speaker.description, self.scene
            ),
        }
    }
}

/// One page of ordered panels
#[derive(Clone, Debug)]
pub struct PageScript {
    /// Page title shown in the viewer
    pub title: &'static str,
    /// Ordered panels
    pub panels: Vec<PanelScript>,
}

/// A full story: title, cast framing, and ordered pages
#[derive(Clone, Debug)]
pub struct StoryScript {
    /// Story title
    pub title: &'static str,
    /// Style label recorded in the metadata
    pub style_label: &'static str,
    /// Dialogue language recorded in the metadata
    pub language: &'static str,
    /// Negative prompt applied to every panel
    pub negative_prompt: &'static str,
    /// Prompt assembly mode
    pub prompt_mode: PromptMode,
    /// Ordered pages
    pub pages: Vec<PageScript>,
}

impl StoryScript {
    /// Total number of panels across all pages
    pub fn panel_count(&self) -> usize {
        self.pages.iter().map(|page| page.panels.len()).sum()
    }

    /// Distinct cast members in script order
    pub fn cast(&self) -> Vec<CastMember> {
        let mut cast = Vec::new();
        for page in &self.pages {
            for panel in &page.panels {
                for member in std::iter::once(panel.speaker).chain(panel.partner) {
                    if !cast.contains(&member) {
                        cast.push(member);
                    }
                }
            }
        }
        cast
    }
}

/// The two-page French treasure hunt book
pub fn treasure_hunt_book() -> StoryScript {
    let duo = Some(CastMember::Monica);
    StoryScript {
        title: "L'Aventure du Trésor Perdu",
        style_label: "Monica's Gang / Turma da Mônica",
        language: "French",
        negative_prompt: BOOK_NEGATIVE_PROMPT,
        prompt_mode: PromptMode::References,
        pages: vec![
            PageScript {
                title: "L'Aventure du Trésor Perdu",
                panels: vec![
                    PanelScript {
                        scene: "two kids meeting in a park",
                        dialogue: "Salut Monica! J'ai trouvé une carte!",
                        placement: Placement::Top,
                        speaker: CastMember::JimmyFive,
                        partner: duo,
                    },
                    PanelScript {
                        scene: "looking at treasure map together",
                        dialogue: "Un trésor? Allons-y!",
                        placement: Placement::Bottom,
                        speaker: CastMember::JimmyFive,
                        partner: duo,
                    },
                    PanelScript {
                        scene: "walking through forest path",
                        dialogue: "Par ici, je crois!",
                        placement: Placement::TopRight,
                        speaker: CastMember::JimmyFive,
                        partner: duo,
                    },
                    PanelScript {
                        scene: "finding a big tree with X mark",
                        dialogue: "Regardez! Le X!",
                        placement: Placement::BottomRight,
                        speaker: CastMember::JimmyFive,
                        partner: duo,
                    },
                ],
            },
            PageScript {
                title: "La Découverte",
                panels: vec![
                    PanelScript {
                        scene: "digging under the tree",
                        dialogue: "Creusons ensemble!",
                        placement: Placement::Top,
                        speaker: CastMember::JimmyFive,
                        partner: duo,
                    },
                    PanelScript {
                        scene: "finding a wooden chest",
                        dialogue: "On l'a trouvé!",
                        placement: Placement::Bottom,
                        speaker: CastMember::JimmyFive,
                        partner: duo,
                    },
                    PanelScript {
                        scene: "opening chest full of candy and toys",
                        dialogue: "Des bonbons et des jouets!",
                        placement: Placement::TopRight,
                        speaker: CastMember::JimmyFive,
                        partner: duo,
                    },
                    PanelScript {
                        scene: "celebrating together happily",
                        dialogue: "Quelle aventure magnifique!",
                        placement: Placement::BottomRight,
                        speaker: CastMember::JimmyFive,
                        partner: duo,
                    },
                ],
            },
        ],
    }
}

/// The four-panel trigger-worded strip
pub fn treasure_hunt_strip() -> StoryScript {
    StoryScript {
        title: "Jimmy Five's New Adventure",
        style_label: "Monica's Gang / Turma da Mônica",
        language: "Portuguese",
        negative_prompt: STRIP_NEGATIVE_PROMPT,
        prompt_mode: PromptMode::TriggerWord,
        pages: vec![PageScript {
            title: "Jimmy Five's New Adventure",
            panels: vec![
                PanelScript {
                    scene: "standing in a park waving",
                    dialogue: "OLÁ, AMIGOS!",
                    placement: Placement::Top,
                    speaker: CastMember::JimmyFive,
                    partner: None,
                },
                PanelScript {
                    scene: "finding a map on the ground, excited expression",
                    dialogue: "UM MAPA DO TESOURO!",
                    placement: Placement::Bottom,
                    speaker: CastMember::JimmyFive,
                    partner: None,
                },
                PanelScript {
                    scene: "walking through forest with map",
                    dialogue: "VAMOS EXPLORAR!",
                    placement: Placement::TopRight,
                    speaker: CastMember::JimmyFive,
                    partner: None,
                },
                PanelScript {
                    scene: "digging under a tree, finding treasure chest",
                    dialogue: "ENCONTREI!",
                    placement: Placement::Center,
                    speaker: CastMember::JimmyFive,
                    partner: None,
                },
            ],
        }],
    }
}
