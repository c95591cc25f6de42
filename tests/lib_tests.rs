#[cfg(test)]
mod tests {
    use unlocker_installer::{
        parse_tool_version, version_is_untested, Action, Platform, TESTED_MAJOR_VERSION,
    };

    // Test action parsing for all recognized values
    #[test]
    fn test_action_parsing() {
        assert_eq!("install".parse::<Action>().unwrap(), Action::Install);
        assert_eq!("uninstall".parse::<Action>().unwrap(), Action::Uninstall);
        assert_eq!("update".parse::<Action>().unwrap(), Action::Update);
    }

    // Actions are case-insensitive
    #[test]
    fn test_action_parsing_is_case_insensitive() {
        assert_eq!("INSTALL".parse::<Action>().unwrap(), Action::Install);
        assert_eq!("Uninstall".parse::<Action>().unwrap(), Action::Uninstall);
        assert_eq!("uPdAtE".parse::<Action>().unwrap(), Action::Update);
    }

    // Unknown actions are rejected with a message naming the alternatives
    #[test]
    fn test_unknown_action_rejected() {
        let err = "reinstall".parse::<Action>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("reinstall"));
        assert!(message.contains("install, uninstall, or update"));

        assert!("".parse::<Action>().is_err());
    }

    // Only install and update require the tools image
    #[test]
    fn test_needs_tools() {
        assert!(Action::Install.needs_tools());
        assert!(Action::Update.needs_tools());
        assert!(!Action::Uninstall.needs_tools());
    }

    // Every (platform, action) pair maps to its fixed script filename
    #[test]
    fn test_script_map() {
        assert_eq!(
            Platform::Linux.script_name(Action::Install),
            "lnx-install.sh"
        );
        assert_eq!(
            Platform::Linux.script_name(Action::Uninstall),
            "lnx-uninstall.sh"
        );
        assert_eq!(
            Platform::Linux.script_name(Action::Update),
            "lnx-update-tools.sh"
        );
        assert_eq!(
            Platform::Windows.script_name(Action::Install),
            "win-install.cmd"
        );
        assert_eq!(
            Platform::Windows.script_name(Action::Uninstall),
            "win-uninstall.cmd"
        );
        assert_eq!(
            Platform::Windows.script_name(Action::Update),
            "win-update-tools.cmd"
        );
    }

    // Platform detection on the build host
    #[test]
    fn test_platform_detection() {
        #[cfg(target_os = "linux")]
        assert_eq!(Platform::detect().unwrap(), Platform::Linux);

        #[cfg(target_os = "windows")]
        assert_eq!(Platform::detect().unwrap(), Platform::Windows);

        #[cfg(not(any(target_os = "linux", target_os = "windows")))]
        assert!(Platform::detect().is_err());
    }

    // Version extraction takes the leftmost version-shaped substring
    #[test]
    fn test_version_extraction() {
        assert_eq!(
            parse_tool_version("VMware Workstation 16.2.1 build-18811642"),
            Some("16.2.1".to_string())
        );
        assert_eq!(
            parse_tool_version("VMware Workstation 15.5 for Linux"),
            Some("15.5".to_string())
        );

        // Leftmost match wins over later candidates
        assert_eq!(
            parse_tool_version("version 12.3.4 (was 15.0.0)"),
            Some("12.3.4".to_string())
        );
    }

    // Output without a version yields no match and no warning branch
    #[test]
    fn test_version_extraction_no_match() {
        assert_eq!(parse_tool_version("VMware Workstation"), None);
        assert_eq!(parse_tool_version(""), None);
    }

    // Repeated calls keep matching; None always means "no match"
    #[test]
    fn test_version_extraction_is_repeatable() {
        for _ in 0..3 {
            assert_eq!(
                parse_tool_version("VMware Workstation 16.0"),
                Some("16.0".to_string())
            );
            assert_eq!(parse_tool_version("no digits here"), None);
        }
    }

    // The untested warning triggers above major 15 only
    #[test]
    fn test_untested_version_threshold() {
        assert!(version_is_untested("16.2.1"));
        assert!(version_is_untested("17.0"));
        assert!(!version_is_untested("15.5.0"));
        assert!(!version_is_untested("15.9"));
        assert!(!version_is_untested("14.1.3"));

        // Unparseable majors never warn
        assert!(!version_is_untested("garbage"));
        assert!(!version_is_untested(""));

        assert_eq!(TESTED_MAJOR_VERSION, 15);
    }
}
