/// The closed set of known client portals, plus the generic fallback.
///
/// Unrecognized identifiers are a supported degenerate case: they dispatch
/// to `Generic`, which carries the raw identifier for the renderer. Adding
/// a portal means adding a variant here, so the change is visible at
/// compile time everywhere portals are matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortalKind {
    SamLaw,
    EvolutionFoods,
    Veilrift,
    AiCommandCenter,
    Dreamcatcher,
    /// Any identifier outside the known set
    Generic(String),
}

impl PortalKind {
    /// Total mapping from a raw portal identifier; never fails.
    pub fn from_identifier(identifier: &str) -> Self {
        match identifier {
            "sam-law" => Self::SamLaw,
            "evolution-foods" => Self::EvolutionFoods,
            "veilrift" => Self::Veilrift,
            "ai-command-center" => Self::AiCommandCenter,
            "dreamcatcher" => Self::Dreamcatcher,
            other => Self::Generic(other.to_string()),
        }
    }

    /// The identifier as it appears in portal URLs
    pub fn identifier(&self) -> &str {
        match self {
            Self::SamLaw => "sam-law",
            Self::EvolutionFoods => "evolution-foods",
            Self::Veilrift => "veilrift",
            Self::AiCommandCenter => "ai-command-center",
            Self::Dreamcatcher => "dreamcatcher",
            Self::Generic(identifier) => identifier,
        }
    }

    /// Template path handed to the rendering collaborator
    pub fn template(&self) -> &'static str {
        match self {
            Self::SamLaw => "portals/sam_law.html",
            Self::EvolutionFoods => "portals/evolution_foods.html",
            Self::Veilrift => "portals/veilrift.html",
            Self::AiCommandCenter => "portals/ai_command_center.html",
            Self::Dreamcatcher => "portals/dreamcatcher.html",
            Self::Generic(_) => "portals/generic.html",
        }
    }

    pub fn is_generic(&self) -> bool {
        matches!(self, Self::Generic(_))
    }
}

impl std::fmt::Display for PortalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.identifier())
    }
}
