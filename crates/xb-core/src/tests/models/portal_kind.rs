use crate::{PortalContext, PortalKind, SessionUser};

use proptest::prelude::*;

fn session_user() -> SessionUser {
    SessionUser {
        external_id: "google-oauth2|1001".to_string(),
        email: "client@xibalba.example".to_string(),
        display_name: Some("Test Client".to_string()),
    }
}

#[test]
fn test_known_identifiers_dispatch_to_their_variant() {
    assert_eq!(PortalKind::from_identifier("sam-law"), PortalKind::SamLaw);
    assert_eq!(
        PortalKind::from_identifier("evolution-foods"),
        PortalKind::EvolutionFoods
    );
    assert_eq!(PortalKind::from_identifier("veilrift"), PortalKind::Veilrift);
    assert_eq!(
        PortalKind::from_identifier("ai-command-center"),
        PortalKind::AiCommandCenter
    );
    assert_eq!(
        PortalKind::from_identifier("dreamcatcher"),
        PortalKind::Dreamcatcher
    );
}

#[test]
fn test_unknown_identifier_falls_back_to_generic() {
    let kind = PortalKind::from_identifier("unknown-id");

    assert!(kind.is_generic());
    assert_eq!(kind.identifier(), "unknown-id");
    assert_eq!(kind.template(), "portals/generic.html");
}

#[test]
fn test_known_kinds_map_to_their_templates() {
    assert_eq!(PortalKind::SamLaw.template(), "portals/sam_law.html");
    assert_eq!(
        PortalKind::EvolutionFoods.template(),
        "portals/evolution_foods.html"
    );
    assert_eq!(PortalKind::Veilrift.template(), "portals/veilrift.html");
    assert_eq!(
        PortalKind::AiCommandCenter.template(),
        "portals/ai_command_center.html"
    );
    assert_eq!(
        PortalKind::Dreamcatcher.template(),
        "portals/dreamcatcher.html"
    );
}

#[test]
fn test_portal_context_carries_identifier_and_user() {
    let kind = PortalKind::from_identifier("unknown-id");
    let context = PortalContext::new(&kind, session_user());

    assert_eq!(context.portal_type, "unknown-id");
    assert_eq!(context.template, "portals/generic.html");
    assert_eq!(context.user.email, "client@xibalba.example");
}

#[test]
fn test_portal_context_serializes_for_renderer() {
    let kind = PortalKind::from_identifier("sam-law");
    let context = PortalContext::new(&kind, session_user());

    let json = serde_json::to_value(&context).unwrap();
    assert_eq!(json["portal_type"], "sam-law");
    assert_eq!(json["template"], "portals/sam_law.html");
    assert_eq!(json["user"]["email"], "client@xibalba.example");
}

proptest! {
    #[test]
    fn given_any_identifier_when_dispatched_then_identifier_round_trips(id in "[a-z0-9-]{1,40}") {
        let kind = PortalKind::from_identifier(&id);
        prop_assert_eq!(kind.identifier(), id.as_str());
    }

    #[test]
    fn given_identifier_outside_known_set_when_dispatched_then_generic(id in "[a-z]{12,30}") {
        if !["dreamcatcher", "ai-command-center", "sam-law", "evolution-foods", "veilrift"]
            .contains(&id.as_str())
        {
            let kind = PortalKind::from_identifier(&id);
            prop_assert!(kind.is_generic());
            prop_assert_eq!(kind.template(), "portals/generic.html");
        }
    }
}
