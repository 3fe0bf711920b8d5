mod common;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use accordclient::channels::TextChannel;
use accordclient::models::channel::ChannelType;
use accordclient::{
    create_channel, Channel, ChannelKind, Client, ClientConfig, CreateChannelOptions, Guild,
    Structures,
};
use common::{channel_data, client_with_guild};
use serde_json::json;

const SUPPRESS: CreateChannelOptions = CreateChannelOptions {
    allow_unknown_guild: true,
    from_interaction: false,
};

#[test]
fn test_text_channel_lands_in_guild_cache() {
    let (client, guild) = client_with_guild("G1");
    let data = channel_data(json!({ "type": 0, "guild_id": "G1", "id": "C1" }));

    let channel = create_channel(&client, &data, None, CreateChannelOptions::default()).unwrap();
    assert_eq!(channel.kind(), ChannelKind::Text);
    assert_eq!(channel.id(), "C1");
    assert_eq!(channel.guild_id(), Some("G1"));

    let cached = guild.channels.get("C1").unwrap();
    assert!(Arc::ptr_eq(&channel, &cached));
}

#[test]
fn test_every_guild_type_maps_to_its_kind() {
    let cases = [
        (0, ChannelKind::Text),
        (2, ChannelKind::Voice),
        (4, ChannelKind::Category),
        (5, ChannelKind::News),
        (10, ChannelKind::Thread),
        (11, ChannelKind::Thread),
        (12, ChannelKind::Thread),
        (13, ChannelKind::Stage),
        (14, ChannelKind::Directory),
        (15, ChannelKind::Forum),
    ];
    let (client, guild) = client_with_guild("G1");
    for (channel_type, kind) in cases {
        let id = format!("c{channel_type}");
        let data = channel_data(json!({ "id": id, "type": channel_type, "guild_id": "G1" }));
        let channel = create_channel(&client, &data, None, CreateChannelOptions::default())
            .unwrap_or_else(|| panic!("type {channel_type} produced nothing"));
        assert_eq!(channel.kind(), kind, "type {channel_type}");
        assert_eq!(i64::from(channel.channel_type()), channel_type);
        assert!(guild.channels.contains(&id), "type {channel_type} not cached");
    }
    assert_eq!(guild.channels.len(), cases.len());
}

#[test]
fn test_supplied_guild_without_guild_id() {
    let client = Client::new(ClientConfig::default());
    let guild = Arc::new(Guild::new("G2", "not registered"));
    let data = channel_data(json!({ "id": "C1", "type": 2 }));

    let channel = create_channel(
        &client,
        &data,
        Some(Arc::clone(&guild)),
        CreateChannelOptions::default(),
    )
    .unwrap();
    assert_eq!(channel.kind(), ChannelKind::Voice);
    assert_eq!(channel.guild_id(), Some("G2"));
    assert!(guild.channels.contains("C1"));
    assert!(client.guilds().get("G2").is_none());
}

#[test]
fn test_suppressed_insertion() {
    let (client, guild) = client_with_guild("G1");
    let data = channel_data(json!({ "id": "C1", "type": 0, "guild_id": "G1" }));

    let channel = create_channel(&client, &data, None, SUPPRESS).unwrap();
    assert_eq!(channel.kind(), ChannelKind::Text);
    assert!(guild.channels.is_empty());
}

#[test]
fn test_unknown_guild_yields_nothing() {
    let (client, guild) = client_with_guild("G1");
    let data = channel_data(json!({ "id": "C1", "type": 0, "guild_id": "G404" }));

    assert!(create_channel(&client, &data, None, CreateChannelOptions::default()).is_none());
    assert!(guild.channels.is_empty());
}

#[test]
fn test_unknown_guild_allowed() {
    let client = Client::new(ClientConfig::default());
    let data = channel_data(json!({ "id": "C1", "type": 15, "guild_id": "G404" }));

    let channel = create_channel(&client, &data, None, SUPPRESS).unwrap();
    assert_eq!(channel.kind(), ChannelKind::Forum);
    assert_eq!(channel.guild_id(), Some("G404"));
}

#[test]
fn test_unrecognized_guild_type_yields_nothing() {
    let (client, guild) = client_with_guild("G1");
    for channel_type in [16, 1, 3] {
        let data = channel_data(json!({ "id": "C1", "type": channel_type, "guild_id": "G1" }));
        assert!(
            create_channel(&client, &data, None, CreateChannelOptions::default()).is_none(),
            "type {channel_type}"
        );
    }
    assert!(guild.channels.is_empty());
}

#[test]
fn test_wide_type_value_yields_nothing() {
    let (client, guild) = client_with_guild("G1");
    let data = channel_data(json!({ "id": "C1", "type": 256, "guild_id": "G1" }));
    assert_eq!(data.channel_type, ChannelType::Unknown(256));

    assert!(create_channel(&client, &data, None, CreateChannelOptions::default()).is_none());
    assert!(guild.channels.is_empty());
}

#[test]
fn test_empty_guild_id_is_a_dm() {
    let client = Client::new(ClientConfig::default());
    let data = channel_data(json!({ "id": "D1", "type": 1, "guild_id": "" }));
    let channel = create_channel(&client, &data, None, CreateChannelOptions::default()).unwrap();
    assert_eq!(channel.kind(), ChannelKind::Dm);
    assert!(channel.guild_id().is_none());
}

#[test]
fn test_dm_by_type() {
    let client = Client::new(ClientConfig::default());
    let data = channel_data(json!({ "id": "D1", "type": 1 }));
    let channel = create_channel(&client, &data, None, CreateChannelOptions::default()).unwrap();
    assert_eq!(channel.kind(), ChannelKind::Dm);
}

#[test]
fn test_dm_by_recipients() {
    let client = Client::new(ClientConfig::default());
    let data = channel_data(json!({
        "id": "D1",
        "type": 0,
        "recipients": [{ "id": "U1", "username": "nelly" }]
    }));
    let channel = create_channel(&client, &data, None, CreateChannelOptions::default()).unwrap();
    assert_eq!(channel.kind(), ChannelKind::Dm);
    assert_eq!(channel.name(), Some("nelly"));
}

#[test]
fn test_group_dm() {
    let client = Client::new(ClientConfig::default());
    let data = channel_data(json!({
        "id": "D2",
        "type": 3,
        "name": "road trip",
        "recipients": [
            { "id": "U1", "username": "nelly" },
            { "id": "U2", "username": "sam" }
        ]
    }));
    let channel = create_channel(&client, &data, None, CreateChannelOptions::default()).unwrap();
    assert_eq!(channel.kind(), ChannelKind::GroupDm);
    assert_eq!(channel.channel_type(), ChannelType::GroupDm);
    assert_eq!(channel.name(), Some("road trip"));
}

#[test]
fn test_guildless_guild_type_yields_nothing() {
    let client = Client::new(ClientConfig::default());
    let data = channel_data(json!({ "id": "C1", "type": 0 }));
    assert!(create_channel(&client, &data, None, CreateChannelOptions::default()).is_none());
}

#[test]
fn test_thread_registers_with_parent() {
    let (client, guild) = client_with_guild("G1");
    let parent_data = channel_data(json!({ "id": "P1", "type": 15, "guild_id": "G1" }));
    let parent = create_channel(&client, &parent_data, None, CreateChannelOptions::default()).unwrap();

    let thread_data = channel_data(json!({
        "id": "T1",
        "type": 11,
        "guild_id": "G1",
        "parent_id": "P1",
        "applied_tags": ["1"]
    }));
    let thread = create_channel(
        &client,
        &thread_data,
        None,
        CreateChannelOptions {
            allow_unknown_guild: false,
            from_interaction: true,
        },
    )
    .unwrap();

    assert!(thread.as_thread().unwrap().from_interaction);
    assert!(guild.channels.contains("T1"));
    let threads = parent.threads().unwrap();
    assert!(Arc::ptr_eq(&threads.get("T1").unwrap(), &thread));
    assert!(Arc::ptr_eq(&thread.parent(&guild).unwrap(), &parent));
}

#[test]
fn test_thread_registration_suppressed() {
    let (client, guild) = client_with_guild("G1");
    let parent = create_channel(
        &client,
        &channel_data(json!({ "id": "P1", "type": 0, "guild_id": "G1" })),
        None,
        CreateChannelOptions::default(),
    )
    .unwrap();

    let thread = create_channel(
        &client,
        &channel_data(json!({ "id": "T1", "type": 12, "guild_id": "G1", "parent_id": "P1" })),
        Some(Arc::clone(&guild)),
        SUPPRESS,
    )
    .unwrap();

    assert!(thread.is_thread());
    assert!(parent.threads().unwrap().is_empty());
    assert!(!guild.channels.contains("T1"));
}

#[test]
fn test_thread_with_missing_parent_still_cached_in_guild() {
    let (client, guild) = client_with_guild("G1");
    let data = channel_data(json!({ "id": "T1", "type": 10, "guild_id": "G1", "parent_id": "P404" }));

    let thread = create_channel(&client, &data, None, CreateChannelOptions::default()).unwrap();
    assert!(thread.parent(&guild).is_none());
    assert!(guild.channels.contains("T1"));
}

#[test]
fn test_thread_under_non_owning_parent() {
    let (client, guild) = client_with_guild("G1");
    create_channel(
        &client,
        &channel_data(json!({ "id": "V1", "type": 2, "guild_id": "G1" })),
        None,
        CreateChannelOptions::default(),
    );
    let thread = create_channel(
        &client,
        &channel_data(json!({ "id": "T1", "type": 11, "guild_id": "G1", "parent_id": "V1" })),
        None,
        CreateChannelOptions::default(),
    )
    .unwrap();
    assert_eq!(thread.parent(&guild).unwrap().kind(), ChannelKind::Voice);
    assert!(guild.channels.contains("T1"));
}

#[test]
fn test_from_interaction_ignored_for_non_threads() {
    let seen = Arc::new(AtomicBool::new(false));
    let probe = Arc::clone(&seen);
    let client = Client::with_structures(
        ClientConfig::default(),
        Structures::new().extend(ChannelKind::Text, move |init| {
            probe.store(init.from_interaction, Ordering::SeqCst);
            Channel::Text(TextChannel::new(init.data, init.guild))
        }),
    );

    let channel = create_channel(
        &client,
        &channel_data(json!({ "id": "C1", "type": 0 })),
        Some(Arc::new(Guild::new("G1", "probe"))),
        CreateChannelOptions {
            allow_unknown_guild: false,
            from_interaction: true,
        },
    );
    assert!(channel.is_some());
    assert!(!seen.load(Ordering::SeqCst));
}

#[test]
fn test_overridden_constructor_is_used_and_cached() {
    let client = Client::with_structures(
        ClientConfig::default(),
        Structures::new().extend(ChannelKind::News, |init| {
            let mut news = TextChannel::new(init.data, init.guild);
            news.topic = Some(format!("custom news for {}", init.data.id));
            Channel::News(news)
        }),
    );
    let guild = client.add_guild(&common::guild_data("G1", "custom"));

    let channel = create_channel(
        &client,
        &channel_data(json!({ "id": "N1", "type": 5, "guild_id": "G1" })),
        None,
        CreateChannelOptions::default(),
    )
    .unwrap();
    assert_eq!(
        channel.as_text().and_then(|news| news.topic.as_deref()),
        Some("custom news for N1")
    );
    assert!(guild.channels.contains("N1"));
}
