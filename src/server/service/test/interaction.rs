use super::*;

const EPHEMERAL: u64 = 1 << 6;

/// Tests that a ping is answered before the rest of the payload is read.
///
/// Expected: Ok with type 1
#[tokio::test]
async fn answers_ping() -> Result<(), AppError> {
    let response = dispatch(CommandRegistry::new(), json!({ "type": 1, "data": 5 })).await?;

    assert_eq!(response["type"], 1);

    Ok(())
}

/// Tests a member holding only one of two required permissions.
///
/// Verifies that the notice names exactly the missing permission and that
/// the command does not run.
///
/// Expected: ephemeral red "Missing Permissions" embed listing `Ban Members`
#[tokio::test]
async fn blocks_member_missing_permission() -> Result<(), AppError> {
    let moderate = Moderate::default();
    let kick_only = Permissions::KICK_MEMBERS.bits().to_string();

    let response = dispatch(
        test_registry(&moderate),
        fixture::chat_input("moderate", Some(&kick_only)),
    )
    .await?;

    let embed = &response["data"]["embeds"][0];
    assert_eq!(response["type"], 4);
    assert_eq!(response["data"]["flags"], EPHEMERAL);
    assert_eq!(embed["title"], "Missing Permissions");
    assert_eq!(
        embed["description"],
        "You are missing the following permissions: `Ban Members`"
    );
    assert_eq!(embed["color"], 0xFF0000);
    assert_eq!(moderate.runs.load(Ordering::SeqCst), 0);

    Ok(())
}

/// Tests a member holding every required permission.
///
/// Expected: command runs and its reply is the response
#[tokio::test]
async fn runs_command_for_permitted_member() -> Result<(), AppError> {
    let moderate = Moderate::default();
    let both = (Permissions::KICK_MEMBERS | Permissions::BAN_MEMBERS)
        .bits()
        .to_string();

    let response = dispatch(
        test_registry(&moderate),
        fixture::chat_input("moderate", Some(&both)),
    )
    .await?;

    assert_eq!(response["data"]["content"], "moderated");
    assert_eq!(moderate.runs.load(Ordering::SeqCst), 1);

    Ok(())
}

/// Tests invocations without member permission information.
///
/// Covers a DM invocation and a member object lacking a permission field.
///
/// Expected: command runs both times
#[tokio::test]
async fn runs_command_without_member_permissions() -> Result<(), AppError> {
    let moderate = Moderate::default();

    let dm = dispatch(test_registry(&moderate), fixture::dm_chat_input("moderate")).await?;
    let no_bits = dispatch(
        test_registry(&moderate),
        fixture::chat_input("moderate", None),
    )
    .await?;

    assert_eq!(dm["data"]["content"], "moderated");
    assert_eq!(no_bits["data"]["content"], "moderated");
    assert_eq!(moderate.runs.load(Ordering::SeqCst), 2);

    Ok(())
}

/// Tests a member whose permission string cannot be parsed.
///
/// Expected: treated as holding nothing; both permissions reported missing
#[tokio::test]
async fn malformed_permissions_grant_nothing() -> Result<(), AppError> {
    let moderate = Moderate::default();

    let response = dispatch(
        test_registry(&moderate),
        fixture::chat_input("moderate", Some("lots")),
    )
    .await?;

    let description = response["data"]["embeds"][0]["description"]
        .as_str()
        .unwrap_or_default()
        .to_string();
    assert!(description.contains("`Kick Members`"));
    assert!(description.contains("`Ban Members`"));
    assert_eq!(moderate.runs.load(Ordering::SeqCst), 0);

    Ok(())
}

/// Tests a command name missing from the registry.
///
/// Expected: ephemeral unknown command message
#[tokio::test]
async fn reports_unknown_command() -> Result<(), AppError> {
    let response = dispatch(
        CommandRegistry::new(),
        fixture::chat_input("nope", Some("0")),
    )
    .await?;

    assert_eq!(response["type"], 4);
    assert_eq!(response["data"]["content"], UNKNOWN_COMMAND);
    assert_eq!(response["data"]["flags"], EPHEMERAL);

    Ok(())
}

/// Tests a user context menu command.
///
/// Expected: ephemeral not supported message, command not run
#[tokio::test]
async fn rejects_context_menu_commands() -> Result<(), AppError> {
    let moderate = Moderate::default();

    let response = dispatch(test_registry(&moderate), fixture::user_command("moderate")).await?;

    assert_eq!(response["data"]["content"], UNSUPPORTED_COMMAND);
    assert_eq!(moderate.runs.load(Ordering::SeqCst), 0);

    Ok(())
}

/// Tests non-command interactions.
///
/// Expected: empty autocomplete choices, type 6 for components, modals and unknown types
#[tokio::test]
async fn answers_non_command_interactions() -> Result<(), AppError> {
    let autocomplete = dispatch(CommandRegistry::new(), fixture::autocomplete("info")).await?;
    assert_eq!(autocomplete["type"], 8);
    assert_eq!(autocomplete["data"]["choices"], json!([]));

    for payload in [
        fixture::message_component(),
        fixture::modal_submit(),
        fixture::unknown(99),
    ] {
        let response = dispatch(CommandRegistry::new(), payload).await?;
        assert_eq!(response["type"], 6);
    }

    Ok(())
}

/// Tests an interaction type past the range of a byte.
///
/// Expected: Ok with a type 6 acknowledgement, not a decode error
#[tokio::test]
async fn acknowledges_wide_unknown_type() -> Result<(), AppError> {
    let response = dispatch(
        CommandRegistry::new(),
        json!({ "type": 300, "id": "1", "token": "t" }),
    )
    .await?;

    assert_eq!(response["type"], 6);

    Ok(())
}

/// Tests a command that returns without replying.
///
/// Expected: ephemeral fallback message
#[tokio::test]
async fn falls_back_when_command_is_silent() -> Result<(), AppError> {
    let response = dispatch(
        test_registry(&Moderate::default()),
        fixture::chat_input("silent", None),
    )
    .await?;

    assert_eq!(response["data"]["content"], NO_RESPONSE);
    assert_eq!(response["data"]["flags"], EPHEMERAL);

    Ok(())
}

/// Tests a command that fails before replying.
///
/// Expected: ephemeral error message, not an HTTP error
#[tokio::test]
async fn reports_command_failure() -> Result<(), AppError> {
    let response = dispatch(
        test_registry(&Moderate::default()),
        fixture::chat_input("failing", None),
    )
    .await?;

    assert_eq!(response["data"]["content"], COMMAND_FAILED);
    assert_eq!(response["data"]["flags"], EPHEMERAL);

    Ok(())
}

/// Tests a command that tries to reply twice.
///
/// Expected: the first reply is the response; the second attempt failed inside the command
#[tokio::test]
async fn keeps_first_reply() -> Result<(), AppError> {
    let response = dispatch(
        test_registry(&Moderate::default()),
        fixture::chat_input("chatty", None),
    )
    .await?;

    assert_eq!(response["data"]["content"], "first");

    Ok(())
}

/// Tests the context directly for the double reply error.
///
/// Expected: Err(CommandError::AlreadyResponded) on the second reply and on defer
#[tokio::test]
async fn context_refuses_second_response() -> Result<(), AppError> {
    let state = test_state(test_config("http://127.0.0.1:1"), CommandRegistry::new()).await;
    let interaction: Interaction = serde_json::from_value(fixture::chat_input("x", None))?;
    let mut ctx = CommandContext::new(&interaction, &state);

    ctx.reply(CreateInteractionResponseMessage::new().content("one"))?;

    assert!(matches!(
        ctx.reply(CreateInteractionResponseMessage::new().content("two")),
        Err(CommandError::AlreadyResponded)
    ));
    assert!(matches!(
        ctx.defer(true),
        Err(CommandError::AlreadyResponded)
    ));
    assert!(ctx.has_responded());

    Ok(())
}

/// Tests a command interaction that does not decode.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_malformed_command() {
    let result = dispatch(CommandRegistry::new(), json!({ "type": 2, "data": "x" })).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

/// Tests `/info` with statistics and top.gg votes.
///
/// Expected: "QuickVids Info" embed with seven inline fields and formatted counts
#[tokio::test]
async fn info_reports_statistics() -> Result<(), AppError> {
    let upstream = FakeDiscord::start(Router::new().route(
        "/api/bots/{id}",
        get(|headers: HeaderMap| async move {
            if headers.get(AUTHORIZATION).is_none() {
                return Err(StatusCode::UNAUTHORIZED);
            }
            Ok(Json(json!({ "points": 1234, "monthlyPoints": 56 })))
        }),
    ))
    .await
    .unwrap();

    let mut config = test_config(&upstream.base_url);
    config.topgg_token = Some("topgg-token".to_string());
    let state = test_state(config, commands::registry()).await;

    factory::embed_event::EmbedEventFactory::new(&state.db)
        .user_id("11")
        .build()
        .await?;
    factory::embed_event::EmbedEventFactory::new(&state.db)
        .user_id("11")
        .hours_ago(48)
        .build()
        .await?;
    factory::discord_guild::create_guild(&state.db).await?;

    let body = serde_json::to_vec(&fixture::chat_input("info", Some("0")))?;
    let response = serde_json::to_value(InteractionService::new(&state).dispatch(&body).await?)?;

    let embed = &response["data"]["embeds"][0];
    let fields = embed["fields"].as_array().cloned().unwrap_or_default();
    let field = |name: &str| {
        fields
            .iter()
            .find(|field| field["name"] == name)
            .map(|field| field["value"].clone())
    };

    assert_eq!(embed["title"], "QuickVids Info");
    assert_eq!(
        embed["description"],
        "Here is some general information and statistics about QuickVids."
    );
    assert_eq!(embed["color"], 0x5865F2);
    assert_eq!(fields.len(), 7);
    assert!(fields.iter().all(|field| field["inline"] == true));
    assert_eq!(field("TikToks Embedded 📈"), Some(json!("2")));
    assert_eq!(field("Past 24 Hours ⌛"), Some(json!("1")));
    assert_eq!(field("User Count 👤"), Some(json!("1")));
    assert_eq!(field("Total Servers 🏠"), Some(json!("1")));
    assert_eq!(field("Top.gg Votes 📈"), Some(json!("1,234")));
    assert!(field("Embedded Today 📅")
        .and_then(|value| value.as_str().map(str::to_string))
        .is_some_and(|value| value.contains(" since <t:") && value.ends_with(":R>")));

    Ok(())
}

/// Tests `/info` without a top.gg token.
///
/// Expected: six fields, no vote field
#[tokio::test]
async fn info_omits_votes_without_token() -> Result<(), AppError> {
    let response = dispatch(commands::registry(), fixture::dm_chat_input("info")).await?;

    let fields = response["data"]["embeds"][0]["fields"]
        .as_array()
        .cloned()
        .unwrap_or_default();

    assert_eq!(fields.len(), 6);
    assert!(fields.iter().all(|field| field["name"] != "Top.gg Votes 📈"));

    Ok(())
}
