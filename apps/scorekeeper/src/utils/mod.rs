pub mod player_id;
