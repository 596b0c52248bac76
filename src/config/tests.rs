// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Unit tests for configuration module

#[cfg(test)]
mod test {
    use super::super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    fn minimal() -> Vec<(&'static str, &'static str)> {
        vec![
            ("MIKROTIK_INTERFACES", "cam1,ether2;cam2,ether3"),
            ("MIKROTIK_DEVICE", "192.168.88.1"),
            ("MIKROTIK_KEY_PATH", "/keys/id_ed25519"),
        ]
    }

    #[test]
    fn test_config_defaults_applied() {
        let config = Config::from_lookup(lookup_from(&minimal())).unwrap();
        assert_eq!(config.server_addr, "0.0.0.0:9090");
        assert_eq!(config.interfaces, "cam1,ether2;cam2,ether3");
        assert_eq!(config.ssh.user, "admin");
        assert_eq!(config.ssh.port, 22);
        assert_eq!(config.ssh.timeout_secs, 30);
        assert_eq!(config.ssh.destination(), "admin@192.168.88.1");
    }

    #[test]
    fn test_config_overrides() {
        let mut pairs = minimal();
        pairs.push(("SERVER_ADDR", "127.0.0.1:8080"));
        pairs.push(("MIKROTIK_USER", "monitor"));
        pairs.push(("MIKROTIK_SSH_PORT", "2222"));
        pairs.push(("SSH_TIMEOUT_SECONDS", "5"));

        let config = Config::from_lookup(lookup_from(&pairs)).unwrap();
        assert_eq!(config.server_addr, "127.0.0.1:8080");
        assert_eq!(config.ssh.user, "monitor");
        assert_eq!(config.ssh.port, 2222);
        assert_eq!(config.ssh.timeout_secs, 5);
    }

    #[test]
    fn test_missing_interfaces_is_config_error() {
        let pairs: Vec<_> = minimal()
            .into_iter()
            .filter(|(k, _)| *k != "MIKROTIK_INTERFACES")
            .collect();
        let err = Config::from_lookup(lookup_from(&pairs)).unwrap_err();
        assert!(matches!(err, AppError::Config(ref m) if m.contains("MIKROTIK_INTERFACES")));
    }

    #[test]
    fn test_missing_device_is_config_error() {
        let pairs: Vec<_> = minimal()
            .into_iter()
            .filter(|(k, _)| *k != "MIKROTIK_DEVICE")
            .collect();
        assert!(matches!(
            Config::from_lookup(lookup_from(&pairs)),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_invalid_port_is_config_error() {
        let mut pairs = minimal();
        pairs.push(("MIKROTIK_SSH_PORT", "ssh"));
        assert!(matches!(
            Config::from_lookup(lookup_from(&pairs)),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_ssh_config_validate() {
        let ssh = SshConfig {
            host: "router".to_string(),
            user: "admin".to_string(),
            key_path: "/keys/id".to_string(),
            port: 22,
            timeout_secs: 30,
        };
        assert!(ssh.validate().is_ok());

        let zero_timeout = SshConfig {
            timeout_secs: 0,
            ..ssh.clone()
        };
        assert!(zero_timeout.validate().is_err());

        let blank_user = SshConfig {
            user: "  ".to_string(),
            ..ssh
        };
        assert!(blank_user.validate().is_err());
    }
}
