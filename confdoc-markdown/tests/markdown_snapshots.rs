//! Snapshot tests for Markdown page rendering.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use confdoc_codegen::{LinkOptions, testing::server_config};
use confdoc_markdown::{DocFormat, Generator, MarkdownOptions};

/// Render all pages and return `(path, content)` pairs.
fn render(options: MarkdownOptions) -> Vec<(String, String)> {
    let config = server_config();
    Generator::new(&config)
        .with_options(options)
        .render()
        .expect("Failed to render pages")
        .into_iter()
        .map(|f| (f.path().display().to_string(), f.content().to_string()))
        .collect()
}

/// Get a specific page from the rendered output.
fn get_page<'a>(files: &'a [(String, String)], path: &str) -> &'a str {
    files
        .iter()
        .find(|(p, _)| p == path)
        .map(|(_, c)| c.as_str())
        .unwrap_or_else(|| panic!("{path} not rendered"))
}

#[test]
fn test_root_page() {
    let files = render(MarkdownOptions::default());
    insta::assert_snapshot!(get_page(&files, "index.md"), @r"
# server

Server configuration reference.

## Properties

### Connectivity

Client connections.

#### [`host`](/host/index.md)

Host for client connections.

Default value: `0.0.0.0`

#### [`port`](/port/index.md)

Port for client connections.

Default value: `4222`

#### [`tls`](/tls/index.md)

TLS settings.

### Limits

#### [`max_payload`](/max_payload/index.md)

Maximum message payload.

Default value: `1MB`

#### [`ping_interval`](/ping_interval/index.md)

_Deprecated. Use `keepalive` instead._

Interval between pings.

#### [`log_level`](/log_level/index.md)

Log verbosity.

*Disabled by default*

#### [`jetstream`](/jetstream/index.md)

Enable JetStream or configure it.
");
}

#[test]
fn test_leaf_page_with_examples() {
    let files = render(MarkdownOptions::default());
    insta::assert_snapshot!(get_page(&files, "port/index.md"), @r"
# port

Port for client connections.

*Type*: `integer`

*Default value*: `4222`

*Reloadable*: `false`. Changing the port requires a restart.

## Examples

### Custom port

Listen on a non-default port.

```
port: 4333
```
");
}

#[test]
fn test_polymorphic_page_relative_tables() {
    let files = render(MarkdownOptions {
        links: LinkOptions::default().relative(true),
        breadcrumbs: true,
        tables: true,
    });
    insta::assert_snapshot!(get_page(&files, "jetstream/index.md"), @r"
# jetstream

/ [server](../index.md)

Enable JetStream or configure it.

*Types*

- `boolean`
- `object`

*Default value*: not applicable

*Reloadable*: `true`

*URL*: <https://docs.example.com/jetstream>

## Properties

| Property | Type | Default | Description |
| --- | --- | --- | --- |
| [`store_dir`](store_dir/index.md) | `string` |  | Storage directory. |
| [`tags`](tags/index.md) | `map(string)` |  | Placement tags. |
");
}

#[test]
fn test_nested_breadcrumbs() {
    let files = render(MarkdownOptions {
        links: LinkOptions::default().relative(true),
        breadcrumbs: true,
        tables: false,
    });
    let page = get_page(&files, "tls/cert_file/index.md");
    assert!(page.starts_with("# cert_file\n\n/ [server](../../index.md) / [tls](../index.md)\n\n"));

    let root = get_page(&files, "index.md");
    assert!(!root.contains("/ ["));
    assert!(root.contains("#### [`host`](host/index.md)"));
}

#[test]
fn test_absolute_links_with_base_and_trimmed_index() {
    let files = render(MarkdownOptions {
        links: LinkOptions::new("/docs/ref/").trim_index(true),
        breadcrumbs: true,
        tables: false,
    });
    let page = get_page(&files, "tls/index.md");
    assert!(page.contains("/ [server](/docs/ref/)"));
    assert!(page.contains("#### [`cert_file`](/docs/ref/tls/cert_file/)"));
    assert!(page.contains("#### [`ciphers`](/docs/ref/tls/ciphers/)"));
}

#[test]
fn test_value_metadata() {
    let files = render(MarkdownOptions::default());

    let log_level = get_page(&files, "log_level/index.md");
    assert!(log_level.contains("*Type*: `string`, one of `debug`, `info`, `warn`"));
    assert!(log_level.contains("*Disabled by default*"));

    let host = get_page(&files, "host/index.md");
    assert!(host.contains("*Aliases*\n\n- `net`\n- `listen`"));
    assert!(host.contains("*Reloadable*: `true`"));

    let max_payload = get_page(&files, "max_payload/index.md");
    assert!(max_payload.contains("*Type*: `bytes`"));
    assert!(max_payload.contains("*Introduced in*: `2.2`"));

    let ping = get_page(&files, "ping_interval/index.md");
    assert!(ping.contains("_**Deprecation notice.** Use `keepalive` instead._"));
    assert!(ping.contains("*Default value*: not applicable"));

    let ciphers = get_page(&files, "tls/ciphers/index.md");
    assert!(ciphers.contains("*Type*: `array(string)`"));
}

#[test]
fn test_root_page_has_no_value_metadata() {
    let files = render(MarkdownOptions::default());
    let root = get_page(&files, "index.md");
    assert!(!root.contains("*Reloadable*"));
    assert!(!root.contains("*Default value*"));
    assert!(!root.contains("*Type"));
}
