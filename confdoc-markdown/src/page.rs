//! Rendering of a single page.

use confdoc_codegen::Page;
use confdoc_core::value_to_string;
use confdoc_ir::{Property, Section, TypeOption};

use crate::{
    MarkdownOptions,
    escape::{code, code_list, table_cell},
};

/// Renders one page of the tree to Markdown.
///
/// A page is made of blocks separated by a blank line: title, breadcrumbs,
/// deprecation notice, description, value metadata, child properties, and
/// examples. Value metadata is skipped on the root page.
pub struct PageRenderer<'a> {
    page: &'a Page<'a>,
    options: &'a MarkdownOptions,
    blocks: Vec<String>,
}

impl<'a> PageRenderer<'a> {
    pub fn new(page: &'a Page<'a>, options: &'a MarkdownOptions) -> Self {
        Self {
            page,
            options,
            blocks: Vec::new(),
        }
    }

    /// Render the page.
    pub fn render(mut self) -> String {
        let prop = self.page.property;

        self.push(format!("# {}", prop.name));
        if self.options.breadcrumbs && !self.page.ancestors.is_empty() {
            self.push(self.breadcrumbs());
        }
        if let Some(deprecation) = &prop.deprecation {
            self.push(format!("_**Deprecation notice.** {deprecation}_"));
        }
        if !prop.description.is_empty() {
            self.push(prop.description.clone());
        }
        if !self.page.is_root() {
            self.value_metadata(prop);
        }
        if prop.has_children() {
            self.properties(prop.child_sections());
        }
        if !prop.examples.is_empty() {
            self.examples(prop);
        }

        let mut out = self.blocks.join("\n\n");
        out.push('\n');
        out
    }

    fn push(&mut self, block: impl Into<String>) {
        self.blocks.push(block.into());
    }

    fn breadcrumbs(&self) -> String {
        let links = &self.options.links;
        self.page
            .ancestors
            .iter()
            .map(|crumb| {
                format!(
                    "/ [{}]({})",
                    crumb.name,
                    self.page.link_to(links, &crumb.segments)
                )
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn value_metadata(&mut self, prop: &Property) {
        match prop.types.as_slice() {
            [] => {}
            [single] => self.push(format!("*Type*: {}", type_summary(single))),
            many => {
                let items: Vec<_> = many
                    .iter()
                    .map(|t| format!("- {}", type_summary(t)))
                    .collect();
                self.push("*Types*");
                self.push(items.join("\n"));
            }
        }

        match &prop.default {
            Some(value) => self.push(format!("*Default value*: {}", code(&value_to_string(value)))),
            None => self.push("*Default value*: not applicable"),
        }
        if prop.disabled {
            self.push("*Disabled by default*");
        }

        let mut reloadable = format!("*Reloadable*: {}", code(&prop.reloadable.to_string()));
        if let Some(note) = &prop.reloadable_note {
            reloadable.push_str(&format!(". {note}"));
        }
        self.push(reloadable);

        if let Some(version) = &prop.version {
            self.push(format!("*Introduced in*: {}", code(version)));
        }
        if let Some(url) = &prop.url {
            self.push(format!("*URL*: <{url}>"));
        }
        if !prop.aliases.is_empty() {
            let items: Vec<_> = prop.aliases.iter().map(|a| format!("- {}", code(a))).collect();
            self.push("*Aliases*");
            self.push(items.join("\n"));
        }
    }

    fn properties(&mut self, sections: &[Section]) {
        self.push("## Properties");
        for section in sections {
            if let Some(name) = &section.name {
                self.push(format!("### {name}"));
            }
            if let Some(description) = &section.description {
                self.push(description.clone());
            }
            if let Some(url) = &section.url {
                self.push(format!("See <{url}>."));
            }
            if section.properties.is_empty() {
                continue;
            }
            if self.options.tables {
                self.push(self.property_table(section));
            } else {
                for child in &section.properties {
                    self.property_entry(child);
                }
            }
        }
    }

    fn child_link(&self, child: &Property) -> String {
        let to = self.page.child_segments(child);
        self.page.link_to(&self.options.links, &to)
    }

    fn property_entry(&mut self, child: &Property) {
        self.push(format!("#### [{}]({})", code(&child.name), self.child_link(child)));
        if let Some(deprecation) = &child.deprecation {
            self.push(format!("_Deprecated. {deprecation}_"));
        }
        if !child.description.is_empty() {
            self.push(child.description.clone());
        }
        if let Some(value) = &child.default {
            self.push(format!("Default value: {}", code(&value_to_string(value))));
        }
        if child.disabled {
            self.push("*Disabled by default*");
        }
    }

    fn property_table(&self, section: &Section) -> String {
        let mut rows = vec![
            "| Property | Type | Default | Description |".to_string(),
            "| --- | --- | --- | --- |".to_string(),
        ];
        for child in &section.properties {
            let types: Vec<_> = child.types.iter().map(TypeOption::type_name).collect();
            let default = child
                .default
                .as_ref()
                .map(|v| code(&table_cell(&value_to_string(v))))
                .unwrap_or_default();
            rows.push(format!(
                "| [{}]({}) | {} | {} | {} |",
                code(&child.name),
                self.child_link(child),
                table_cell(&code_list(&types)),
                default,
                table_cell(&child.description),
            ));
        }
        rows.join("\n")
    }

    fn examples(&mut self, prop: &Property) {
        self.push("## Examples");
        for example in &prop.examples {
            if !example.label.is_empty() {
                self.push(format!("### {}", example.label));
            }
            if !example.description.is_empty() {
                self.push(example.description.clone());
            }
            self.push(format!("```\n{}\n```", example.value.trim_end()));
        }
    }
}

/// `array(string)`, plus the allowed values when the option is an enum.
fn type_summary(opt: &TypeOption) -> String {
    let mut summary = code(&opt.type_name());
    if !opt.choices.is_empty() {
        summary.push_str(&format!(", one of {}", code_list(&opt.choices)));
    }
    summary
}
