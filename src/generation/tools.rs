/// How a tool input is edited in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    TextArea,
    Select(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolInput {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: InputKind,
    pub placeholder: &'static str,
}

impl ToolInput {
    const fn text(name: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            name,
            label,
            kind: InputKind::Text,
            placeholder,
        }
    }

    const fn area(name: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            name,
            label,
            kind: InputKind::TextArea,
            placeholder,
        }
    }

    const fn select(name: &'static str, label: &'static str, options: &'static [&'static str]) -> Self {
        Self {
            name,
            label,
            kind: InputKind::Select(options),
            placeholder: "",
        }
    }

    /// Initial value: the first option for selects, empty otherwise.
    pub fn default_value(&self) -> &'static str {
        match self.kind {
            InputKind::Select(options) => options.first().copied().unwrap_or_default(),
            _ => "",
        }
    }
}

/// A prompt-driven tool listed in the Tools tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiTool {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub system_prompt: &'static str,
    pub inputs: &'static [ToolInput],
}

pub static TOOLS: &[AiTool] = &[
    AiTool {
        id: "trend-scanner",
        name: "Trend Scanner",
        description: "Discover trending keywords and engagement scores.",
        system_prompt: "You are a trend analysis expert. Analyze the given topic and provide a list of currently trending keywords, potential engagement scores (1-100), and brief reasoning for why they are trending. Output as a structured list.",
        inputs: &[ToolInput::text("topic", "Topic or Category", "e.g. Sustainable Fashion")],
    },
    AiTool {
        id: "brand-voice",
        name: "Brand Voice Transformer",
        description: "Rewrite content to match a specific brand persona.",
        system_prompt: "Rewrite the provided content to strictly match the described brand persona. Maintain the core message but completely shift the tone, vocabulary, and style.",
        inputs: &[
            ToolInput::area("content", "Original Content", "Paste your text here..."),
            ToolInput::text("persona", "Brand Persona", "e.g. Witty, Professional, Gen-Z"),
        ],
    },
    AiTool {
        id: "script-gen",
        name: "Script Generator",
        description: "Create scene-by-scene video scripts.",
        system_prompt: "Generate a detailed video script. Include Scene Number, Visual Description, Audio/Dialogue, and estimated duration for each scene. Format clearly.",
        inputs: &[
            ToolInput::select(
                "type",
                "Video Type",
                &["Instagram Reel", "YouTube Long-form", "TikTok", "Commercial"],
            ),
            ToolInput::text("topic", "Topic", "e.g. New Coffee Blend Launch"),
            ToolInput::text("duration", "Duration", "e.g. 30 seconds"),
        ],
    },
    AiTool {
        id: "magic-redesign",
        name: "Magic Re-Designer",
        description: "Get layout and hierarchy improvements.",
        system_prompt: "Act as a senior UI/UX Designer. Analyze the described layout and suggest specific improvements for hierarchy, typography, spacing, and visual flow to achieve the goal.",
        inputs: &[
            ToolInput::area(
                "description",
                "Describe current layout/design",
                "Header is top left, big hero image...",
            ),
            ToolInput::text("goal", "Design Goal", "More modern, better conversion"),
        ],
    },
    AiTool {
        id: "swot-gen",
        name: "SWOT Analysis",
        description: "Detailed Strengths, Weaknesses, Opportunities, Threats.",
        system_prompt: "Conduct a comprehensive SWOT analysis for the brand based on the details provided. Be strategic and critical.",
        inputs: &[
            ToolInput::text("brand", "Brand/Project Name", ""),
            ToolInput::area("details", "Key Details", "e.g. Small organic bakery in NYC..."),
        ],
    },
    AiTool {
        id: "campaign-blueprint",
        name: "Campaign Blueprint",
        description: "Full campaign strategy from theme to deliverables.",
        system_prompt: "Create a Campaign Blueprint. Include: 1. Core Theme/Concept, 2. Storyline, 3. Key Deliverables, 4. Timeline Phases, 5. Call to Actions.",
        inputs: &[
            ToolInput::text("objective", "Objective", ""),
            ToolInput::text("audience", "Target Audience", ""),
            ToolInput::text("platforms", "Platforms", ""),
        ],
    },
    AiTool {
        id: "fake-comment",
        name: "Fake Comment Gen",
        description: "Generate realistic placeholder comments.",
        system_prompt: "Generate 5-10 realistic social media comments about the topic with the specified vibe. Include usernames and varied sentence structures.",
        inputs: &[
            ToolInput::text("topic", "Post Topic", ""),
            ToolInput::select("vibe", "Vibe", &["Positive", "Troll", "Questioning", "Mixed"]),
        ],
    },
];

pub fn find(id: &str) -> Option<&'static AiTool> {
    TOOLS.iter().find(|tool| tool.id == id)
}
