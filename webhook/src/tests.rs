#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use rotom_dex::Dex;

    use crate::handler::handle_update;
    use crate::reply::Reply;
    use crate::update::Update;

    fn dex() -> Dex {
        Dex::builtin().unwrap()
    }

    fn message_update(text: &str) -> Update {
        Update::parse(&json!({"message": {"chat": {"id": 1}, "text": text}}).to_string()).unwrap()
    }

    fn inline_update(query: &str) -> Update {
        Update::parse(&json!({"inline_query": {"id": "1", "query": query}}).to_string()).unwrap()
    }

    fn reply_json(dex: &Dex, update: &Update) -> Value {
        let reply = handle_update(dex, update).unwrap().unwrap();
        serde_json::to_value(&reply).unwrap()
    }

    const TURTWIG_TEXT: &str = "*Turtwig (#387)*\n\
        Type: Grass\n\
        Weak against: Bug (2x), Fire (2x), Flying (2x), Ice (2x), Poison (2x)\n\
        Resistant to: Electric (0.5x), Grass (0.5x), Ground (0.5x), Water (0.5x)\n\
        Abilities: Overgrow\n\
        Height: 1' 4\"\n\
        Weight: 22.5 lbs\n\
        [Image](https://assets.pokemon.com/assets/cms2/img/pokedex/full/387.png)";

    const TURTONATOR_TEXT: &str = "*Turtonator (#776)*\n\
        Type: Fire/Dragon\n\
        Weak against: Dragon (2x), Ground (2x), Rock (2x)\n\
        Resistant to: Bug (0.5x), Electric (0.5x), Steel (0.5x), Fire (0.25x), Grass (0.25x)\n\
        Abilities: Shell Armor\n\
        Height: 6' 7\"\n\
        Weight: 467.4 lbs\n\
        [Image](https://assets.pokemon.com/assets/cms2/img/pokedex/full/776.png)";

    #[test]
    fn test_message_with_full_name() {
        let dex = dex();
        assert_eq!(
            reply_json(&dex, &message_update("turtwig")),
            json!({
                "method": "sendMessage",
                "chat_id": 1,
                "text": TURTWIG_TEXT,
                "parse_mode": "Markdown",
            })
        );
    }

    #[test]
    fn test_message_with_partial_name() {
        let dex = dex();
        assert_eq!(
            reply_json(&dex, &message_update("turt")),
            json!({
                "method": "sendMessage",
                "chat_id": 1,
                "text": TURTWIG_TEXT,
                "parse_mode": "Markdown",
            })
        );
    }

    #[test]
    fn test_message_with_id() {
        let dex = dex();
        let value = reply_json(&dex, &message_update("387"));
        assert_eq!(value["text"], TURTWIG_TEXT);
    }

    #[test]
    fn test_message_query_is_first_token() {
        let dex = dex();
        let value = reply_json(&dex, &message_update("turtwig stats please"));
        assert_eq!(value["text"], TURTWIG_TEXT);
    }

    #[test]
    fn test_message_with_nonexistent_name() {
        let dex = dex();
        assert_eq!(
            reply_json(&dex, &message_update("digimon")),
            json!({
                "method": "sendMessage",
                "chat_id": 1,
                "text": "Couldn't find a matching Pokémon!",
            })
        );
    }

    #[test]
    fn test_message_weakness_and_immunity() {
        let dex = dex();
        let value = reply_json(&dex, &message_update("whiscash"));
        assert_eq!(
            value["text"],
            "*Whiscash (#340)*\n\
             Type: Water/Ground\n\
             Weak against: Grass (4x)\n\
             Resistant to: Fire (0.5x), Poison (0.5x), Rock (0.5x), Steel (0.5x)\n\
             Immune to: Electric\n\
             Abilities: Anticipation, Oblivious\n\
             Height: 2' 11\"\n\
             Weight: 52 lbs\n\
             [Image](https://assets.pokemon.com/assets/cms2/img/pokedex/full/340.png)"
        );
    }

    #[test]
    fn test_message_double_immunity() {
        let dex = dex();
        let value = reply_json(&dex, &message_update("froslass"));
        assert_eq!(
            value["text"],
            "*Froslass (#478)*\n\
             Type: Ice/Ghost\n\
             Weak against: Dark (2x), Fire (2x), Ghost (2x), Rock (2x), Steel (2x)\n\
             Resistant to: Bug (0.5x), Ice (0.5x), Poison (0.5x)\n\
             Immune to: Fighting, Normal\n\
             Abilities: Snow Cloak\n\
             Height: 4' 3\"\n\
             Weight: 58.6 lbs\n\
             [Image](https://assets.pokemon.com/assets/cms2/img/pokedex/full/478.png)"
        );
    }

    #[test]
    fn test_message_without_text_is_ignored() {
        let dex = dex();
        let update = Update::parse(r#"{"message": {"chat": {"id": 1}}}"#).unwrap();
        assert!(handle_update(&dex, &update).unwrap().is_none());
    }

    #[test]
    fn test_unrecognized_update_is_ignored() {
        let dex = dex();
        let update = Update::parse(r#"{"edited_message": {"text": "turtwig"}}"#).unwrap();
        assert!(handle_update(&dex, &update).unwrap().is_none());
    }

    #[test]
    fn test_inline_query_with_full_name() {
        let dex = dex();
        let reply = handle_update(&dex, &inline_update("turtwig")).unwrap().unwrap();
        let Reply::InlineQuery(reply) = reply else {
            panic!("expected inline query reply");
        };
        assert_eq!(reply.method, "answerInlineQuery");
        assert_eq!(reply.inline_query_id, "1");

        let results: Value = serde_json::from_str(&reply.results).unwrap();
        assert_eq!(
            results,
            json!([{
                "type": "article",
                "id": 387,
                "title": "Turtwig (#387)",
                "input_message_content": {
                    "message_text": TURTWIG_TEXT,
                    "parse_mode": "Markdown",
                },
                "description": "Grass",
                "thumb_url": "https://assets.pokemon.com/assets/cms2/img/pokedex/detail/387.png",
            }])
        );
    }

    #[test]
    fn test_inline_query_with_partial_name() {
        let dex = dex();
        let reply = handle_update(&dex, &inline_update("turt")).unwrap().unwrap();
        let Reply::InlineQuery(reply) = reply else {
            panic!("expected inline query reply");
        };

        let results: Value = serde_json::from_str(&reply.results).unwrap();
        let entries = results.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["id"], 387);
        assert_eq!(entries[0]["input_message_content"]["message_text"], TURTWIG_TEXT);
        assert_eq!(entries[1]["id"], 776);
        assert_eq!(entries[1]["description"], "Fire/Dragon");
        assert_eq!(
            entries[1]["input_message_content"]["message_text"],
            TURTONATOR_TEXT
        );
    }

    #[test]
    fn test_inline_query_with_no_matches() {
        let dex = dex();
        assert!(
            handle_update(&dex, &inline_update("digimon"))
                .unwrap()
                .is_none()
        );
    }
}
