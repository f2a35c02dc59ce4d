//! Test fixtures for renderers.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use confdoc_ir::Config;

use crate::load_str;

/// Root config of a small server, covering every page element.
pub const SERVER_CONFIG: &str = r#"
name: server
description: Server configuration reference.
sections:
  - name: Connectivity
    description: Client connections.
    properties:
      host:
        type: string
        description: Host for client connections.
        default: 0.0.0.0
        aliases: [net, listen]
      port:
        type: integer
        description: Port for client connections.
        default: 4222
        reloadable: false
        reloadable_note: Changing the port requires a restart.
        examples:
          - label: Custom port
            description: Listen on a non-default port.
            value: "port: 4333"
      tls:
        type: tls
  - name: Limits
  - properties:
      max_payload:
        type: bytes
        description: Maximum message payload.
        default: 1MB
        version: "2.2"
      ping_interval:
        type: duration
        description: Interval between pings.
        deprecation: Use `keepalive` instead.
      log_level:
        type: string
        description: Log verbosity.
        choices: [debug, info, warn]
        disabled: true
      jetstream:
        types: [boolean, jetstream]
        url: https://docs.example.com/jetstream
"#;

/// Type declarations referenced by [`SERVER_CONFIG`].
pub const SERVER_TYPES: &str = r#"
types:
  tls:
    type: object
    description: TLS settings.
    properties:
      cert_file:
        type: string
        description: Certificate file.
      ciphers:
        type: array(string)
        description: Allowed cipher suites.
  jetstream:
    type: object
    description: Enable JetStream or configure it.
    properties:
      store_dir:
        type: string
        description: Storage directory.
      tags:
        type: map(string)
        description: Placement tags.
"#;

/// The resolved [`SERVER_CONFIG`] tree.
pub fn server_config() -> Config {
    load_str(SERVER_CONFIG, &[SERVER_TYPES]).expect("fixture should resolve")
}
