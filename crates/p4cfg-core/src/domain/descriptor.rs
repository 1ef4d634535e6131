//! Presentation metadata for settings.
//!
//! Each setting has a category, a display name and a help text that a
//! property grid or `p4cfg describe` shows next to the value.  Persistence
//! never reads this table; it exists only for presentation code.

use std::fmt;

use super::setting::Setting;

/// Grouping used when presenting settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    General,
    Operation,
    Connection,
    Branching,
}

impl Category {
    /// Every category, in presentation order.
    pub const ALL: [Category; 4] = [
        Category::General,
        Category::Operation,
        Category::Connection,
        Category::Branching,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Operation => "Operation",
            Self::Connection => "Connection",
            Self::Branching => "Branching",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category, label and help text for one setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingDescriptor {
    pub setting: Setting,
    pub category: Category,
    pub display_name: &'static str,
    pub description: &'static str,
}

const fn entry(
    setting: Setting,
    category: Category,
    display_name: &'static str,
    description: &'static str,
) -> SettingDescriptor {
    SettingDescriptor {
        setting,
        category,
        display_name,
        description,
    }
}

// Same order as `Setting::ALL`.
static DESCRIPTORS: [SettingDescriptor; 16] = [
    entry(
        Setting::EnableBindings,
        Category::General,
        "Enable key bindings",
        "Enable key bindings.",
    ),
    entry(
        Setting::EnableContextMenus,
        Category::General,
        "Enable context menus",
        "Enable context menus.",
    ),
    entry(
        Setting::EnableAdvancedCommands,
        Category::General,
        "Enable advanced commands",
        "Enable advanced commands (open all modified files for edit, commands on the mainline branch).",
    ),
    entry(
        Setting::AutoCheckoutOnEdit,
        Category::Operation,
        "Auto checkout on edit",
        "Check files out of Perforce as soon as they are edited. Costs some editor responsiveness.",
    ),
    entry(
        Setting::AutoCheckoutProject,
        Category::Operation,
        "Auto checkout project",
        "Check project files out when their properties are edited.",
    ),
    entry(
        Setting::AutoCheckoutOnSave,
        Category::Operation,
        "Auto checkout on save",
        "Check files out of Perforce before saving them.",
    ),
    entry(
        Setting::AutoCheckoutOnBuild,
        Category::Operation,
        "Auto checkout on build",
        "Check files out when building.",
    ),
    entry(
        Setting::AutoAdd,
        Category::Operation,
        "Auto add to Perforce",
        "Add newly created files to Perforce.",
    ),
    entry(
        Setting::AutoDelete,
        Category::Operation,
        "Auto delete from Perforce",
        "Delete files from Perforce when they are deleted in the editor. Use with care.",
    ),
    entry(
        Setting::UseSystemEnv,
        Category::Connection,
        "Use system settings",
        "Take port, client and user from the registry or P4CONFIG environment instead of the fields below.",
    ),
    entry(
        Setting::IgnoreReadOnlyOnEdit,
        Category::Operation,
        "Ignore read-only flag on edit",
        "Run p4 edit even when the file is already writable, e.g. under a git checkout above the workspace. Costly.",
    ),
    entry(
        Setting::PreferVisualClient,
        Category::Operation,
        "Prefer P4V to P4Win",
        "Use p4v even when p4win is installed.",
    ),
    entry(Setting::Port, Category::Connection, "Port", "Perforce server port."),
    entry(Setting::Client, Category::Connection, "Client", "Perforce client workspace."),
    entry(Setting::Username, Category::Connection, "Username", "Perforce user name."),
    entry(
        Setting::MainLinePath,
        Category::Branching,
        "Mainline path",
        "Depot path where the mainline version of a file can be found.",
    ),
];

/// Returns the descriptor for one setting.
pub fn descriptor(setting: Setting) -> &'static SettingDescriptor {
    // Variant discriminants follow declaration order, as does the table.
    &DESCRIPTORS[setting as usize]
}

/// All descriptors in declaration order.
pub fn descriptors() -> &'static [SettingDescriptor] {
    &DESCRIPTORS
}

/// Descriptors grouped by category, in category order.  Categories without
/// settings are omitted.
pub fn by_category() -> Vec<(Category, Vec<&'static SettingDescriptor>)> {
    Category::ALL
        .into_iter()
        .map(|category| {
            let members = DESCRIPTORS
                .iter()
                .filter(|d| d.category == category)
                .collect::<Vec<_>>();
            (category, members)
        })
        .filter(|(_, members)| !members.is_empty())
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_follows_setting_order() {
        // Arrange / Act
        let order: Vec<Setting> = descriptors().iter().map(|d| d.setting).collect();

        // Assert
        assert_eq!(order, Setting::ALL.to_vec());
    }

    #[test]
    fn test_descriptor_lookup_returns_matching_entry() {
        for setting in Setting::ALL {
            assert_eq!(descriptor(setting).setting, setting);
        }
    }

    #[test]
    fn test_connection_category_members() {
        let d = descriptor(Setting::UseSystemEnv);
        assert_eq!(d.category, Category::Connection);
        assert_eq!(d.display_name, "Use system settings");
        assert_eq!(descriptor(Setting::Port).category, Category::Connection);
        assert_eq!(
            descriptor(Setting::MainLinePath).category,
            Category::Branching
        );
    }

    #[test]
    fn test_by_category_covers_every_setting_once() {
        // Arrange
        let groups = by_category();

        // Act
        let total: usize = groups.iter().map(|(_, members)| members.len()).sum();
        let categories: Vec<Category> = groups.iter().map(|(c, _)| *c).collect();

        // Assert
        assert_eq!(total, Setting::ALL.len());
        assert_eq!(categories, Category::ALL.to_vec());
        for (category, members) in &groups {
            assert!(members.iter().all(|d| d.category == *category));
        }
    }

    #[test]
    fn test_by_category_keeps_declaration_order_within_group() {
        let groups = by_category();
        let (_, connection) = groups
            .iter()
            .find(|(c, _)| *c == Category::Connection)
            .expect("connection group");
        let order: Vec<Setting> = connection.iter().map(|d| d.setting).collect();
        assert_eq!(
            order,
            vec![
                Setting::UseSystemEnv,
                Setting::Port,
                Setting::Client,
                Setting::Username
            ]
        );
    }

    #[test]
    fn test_every_descriptor_has_label_and_help() {
        for d in descriptors() {
            assert!(!d.display_name.is_empty(), "{}", d.setting);
            assert!(!d.description.is_empty(), "{}", d.setting);
        }
    }
}
