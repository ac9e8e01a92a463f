/// Kind of assistance a user can request for a piece of code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AssistanceKind {
    Explain,
    DetectBugs,
    GenerateCode,
    Optimize,
}

impl std::fmt::Display for AssistanceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssistanceKind::Explain => write!(f, "explain"),
            AssistanceKind::DetectBugs => write!(f, "detect_bugs"),
            AssistanceKind::GenerateCode => write!(f, "generate_code"),
            AssistanceKind::Optimize => write!(f, "optimize"),
        }
    }
}

impl std::str::FromStr for AssistanceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "explain" => Ok(AssistanceKind::Explain),
            "detect_bugs" => Ok(AssistanceKind::DetectBugs),
            "generate_code" => Ok(AssistanceKind::GenerateCode),
            "optimize" => Ok(AssistanceKind::Optimize),
            _ => Err(format!("Invalid assistance kind: {}", s)),
        }
    }
}
