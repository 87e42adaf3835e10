use common::model::player::PlayerId;

/// Parses a `#/players/<id>` location hash into a player id.
pub fn parse_player_route(hash: &str) -> Option<PlayerId> {
    hash.strip_prefix('#')
        .unwrap_or(hash)
        .strip_prefix("/players/")?
        .trim_end_matches('/')
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::parse_player_route;

    #[test]
    fn parses_player_hash() {
        assert_eq!(parse_player_route("#/players/7"), Some(7));
        assert_eq!(parse_player_route("#/players/7/"), Some(7));
        assert_eq!(parse_player_route("/players/12"), Some(12));
    }

    #[test]
    fn ignores_other_hashes() {
        for hash in ["", "#", "#/players", "#/players/", "#/players/abc", "#/teams/3", "#players7"] {
            assert_eq!(parse_player_route(hash), None, "{hash}");
        }
    }
}
