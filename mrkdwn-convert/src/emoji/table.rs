//! Compiled-in shortcode tables.

/// Canonical shortcode names and their glyphs.
pub(super) const EMOJI: &[(&str, &str)] = &[
  // Faces
  ("grinning", "😀"),
  ("smiley", "😃"),
  ("smile", "😄"),
  ("grin", "😁"),
  ("laughing", "😆"),
  ("sweat_smile", "😅"),
  ("rofl", "🤣"),
  ("joy", "😂"),
  ("slightly_smiling_face", "🙂"),
  ("upside_down_face", "🙃"),
  ("wink", "😉"),
  ("blush", "😊"),
  ("innocent", "😇"),
  ("smiling_face_with_three_hearts", "🥰"),
  ("heart_eyes", "😍"),
  ("star_struck", "🤩"),
  ("kissing_heart", "😘"),
  ("yum", "😋"),
  ("stuck_out_tongue", "😛"),
  ("stuck_out_tongue_winking_eye", "😜"),
  ("zany_face", "🤪"),
  ("money_mouth_face", "🤑"),
  ("hugging_face", "🤗"),
  ("face_with_hand_over_mouth", "🤭"),
  ("shushing_face", "🤫"),
  ("thinking_face", "🤔"),
  ("zipper_mouth_face", "🤐"),
  ("face_with_raised_eyebrow", "🤨"),
  ("neutral_face", "😐"),
  ("expressionless", "😑"),
  ("no_mouth", "😶"),
  ("smirk", "😏"),
  ("unamused", "😒"),
  ("face_with_rolling_eyes", "🙄"),
  ("grimacing", "😬"),
  ("lying_face", "🤥"),
  ("relieved", "😌"),
  ("pensive", "😔"),
  ("sleepy", "😪"),
  ("drooling_face", "🤤"),
  ("sleeping", "😴"),
  ("mask", "😷"),
  ("face_with_thermometer", "🤒"),
  ("nauseated_face", "🤢"),
  ("sneezing_face", "🤧"),
  ("hot_face", "🥵"),
  ("cold_face", "🥶"),
  ("woozy_face", "🥴"),
  ("dizzy_face", "😵"),
  ("exploding_head", "🤯"),
  ("face_with_cowboy_hat", "🤠"),
  ("partying_face", "🥳"),
  ("sunglasses", "😎"),
  ("nerd_face", "🤓"),
  ("face_with_monocle", "🧐"),
  ("confused", "😕"),
  ("worried", "😟"),
  ("slightly_frowning_face", "🙁"),
  ("open_mouth", "😮"),
  ("hushed", "😯"),
  ("astonished", "😲"),
  ("flushed", "😳"),
  ("pleading_face", "🥺"),
  ("frowning", "😦"),
  ("anguished", "😧"),
  ("fearful", "😨"),
  ("cold_sweat", "😰"),
  ("disappointed_relieved", "😥"),
  ("cry", "😢"),
  ("sob", "😭"),
  ("scream", "😱"),
  ("confounded", "😖"),
  ("persevere", "😣"),
  ("disappointed", "😞"),
  ("sweat", "😓"),
  ("weary", "😩"),
  ("tired_face", "😫"),
  ("yawning_face", "🥱"),
  ("triumph", "😤"),
  ("rage", "😡"),
  ("angry", "😠"),
  ("face_with_symbols_on_mouth", "🤬"),
  ("smiling_imp", "😈"),
  ("skull", "💀"),
  ("hankey", "💩"),
  ("clown_face", "🤡"),
  ("ghost", "👻"),
  ("alien", "👽"),
  ("robot_face", "🤖"),
  ("see_no_evil", "🙈"),
  ("hear_no_evil", "🙉"),
  ("speak_no_evil", "🙊"),
  // Hands and people
  ("wave", "👋"),
  ("raised_hand", "✋"),
  ("ok_hand", "👌"),
  ("pinching_hand", "🤏"),
  ("v", "✌\u{fe0f}"),
  ("crossed_fingers", "🤞"),
  ("call_me_hand", "🤙"),
  ("point_left", "👈"),
  ("point_right", "👉"),
  ("point_up", "☝\u{fe0f}"),
  ("point_up_2", "👆"),
  ("point_down", "👇"),
  ("+1", "👍"),
  ("-1", "👎"),
  ("fist", "✊"),
  ("facepunch", "👊"),
  ("clap", "👏"),
  ("raised_hands", "🙌"),
  ("open_hands", "👐"),
  ("handshake", "🤝"),
  ("pray", "🙏"),
  ("writing_hand", "✍\u{fe0f}"),
  ("muscle", "💪"),
  ("eyes", "👀"),
  ("brain", "🧠"),
  ("man_shrugging", "🤷\u{200d}♂\u{fe0f}"),
  ("woman_shrugging", "🤷\u{200d}♀\u{fe0f}"),
  ("shrug", "🤷"),
  ("facepalm", "🤦"),
  ("bow", "🙇"),
  ("raising_hand", "🙋"),
  ("technologist", "🧑\u{200d}💻"),
  // Hearts and symbols
  ("heart", "❤\u{fe0f}"),
  ("orange_heart", "🧡"),
  ("yellow_heart", "💛"),
  ("green_heart", "💚"),
  ("blue_heart", "💙"),
  ("purple_heart", "💜"),
  ("black_heart", "🖤"),
  ("white_heart", "🤍"),
  ("broken_heart", "💔"),
  ("sparkling_heart", "💖"),
  ("two_hearts", "💕"),
  ("100", "💯"),
  ("anger", "💢"),
  ("boom", "💥"),
  ("dizzy", "💫"),
  ("sweat_drops", "💦"),
  ("zzz", "💤"),
  ("speech_balloon", "💬"),
  ("thought_balloon", "💭"),
  ("white_check_mark", "✅"),
  ("heavy_check_mark", "✔\u{fe0f}"),
  ("ballot_box_with_check", "☑\u{fe0f}"),
  ("x", "❌"),
  ("negative_squared_cross_mark", "❎"),
  ("heavy_plus_sign", "➕"),
  ("heavy_minus_sign", "➖"),
  ("question", "❓"),
  ("grey_question", "❔"),
  ("exclamation", "❗"),
  ("grey_exclamation", "❕"),
  ("bangbang", "‼\u{fe0f}"),
  ("warning", "⚠\u{fe0f}"),
  ("no_entry", "⛔"),
  ("no_entry_sign", "🚫"),
  ("red_circle", "🔴"),
  ("large_orange_circle", "🟠"),
  ("large_yellow_circle", "🟡"),
  ("large_green_circle", "🟢"),
  ("large_blue_circle", "🔵"),
  ("white_circle", "⚪"),
  ("black_circle", "⚫"),
  ("star", "⭐"),
  ("star2", "🌟"),
  ("sparkles", "✨"),
  ("zap", "⚡"),
  ("fire", "🔥"),
  ("tada", "🎉"),
  ("confetti_ball", "🎊"),
  ("balloon", "🎈"),
  ("gift", "🎁"),
  ("trophy", "🏆"),
  ("medal", "🏅"),
  ("first_place_medal", "🥇"),
  ("dart", "🎯"),
  ("rocket", "🚀"),
  ("airplane", "✈\u{fe0f}"),
  ("car", "🚗"),
  ("bike", "🚲"),
  ("ship", "🚢"),
  ("construction", "🚧"),
  ("rotating_light", "🚨"),
  ("checkered_flag", "🏁"),
  ("triangular_flag_on_post", "🚩"),
  ("arrow_up", "⬆\u{fe0f}"),
  ("arrow_down", "⬇\u{fe0f}"),
  ("arrow_left", "⬅\u{fe0f}"),
  ("arrow_right", "➡\u{fe0f}"),
  ("arrows_counterclockwise", "🔄"),
  ("repeat", "🔁"),
  ("new", "🆕"),
  ("ok", "🆗"),
  ("sos", "🆘"),
  ("information_source", "ℹ\u{fe0f}"),
  ("copyright", "©\u{fe0f}"),
  ("registered", "®\u{fe0f}"),
  ("tm", "™\u{fe0f}"),
  // Objects
  ("bulb", "💡"),
  ("mag", "🔍"),
  ("lock", "🔒"),
  ("unlock", "🔓"),
  ("key", "🔑"),
  ("hammer", "🔨"),
  ("wrench", "🔧"),
  ("hammer_and_wrench", "🛠\u{fe0f}"),
  ("gear", "⚙\u{fe0f}"),
  ("link", "🔗"),
  ("paperclip", "📎"),
  ("pushpin", "📌"),
  ("round_pushpin", "📍"),
  ("memo", "📝"),
  ("pencil2", "✏\u{fe0f}"),
  ("book", "📖"),
  ("books", "📚"),
  ("bookmark", "🔖"),
  ("clipboard", "📋"),
  ("calendar", "📆"),
  ("date", "📅"),
  ("chart_with_upwards_trend", "📈"),
  ("chart_with_downwards_trend", "📉"),
  ("bar_chart", "📊"),
  ("package", "📦"),
  ("email", "📧"),
  ("envelope", "✉\u{fe0f}"),
  ("inbox_tray", "📥"),
  ("outbox_tray", "📤"),
  ("file_folder", "📁"),
  ("open_file_folder", "📂"),
  ("wastebasket", "🗑\u{fe0f}"),
  ("computer", "💻"),
  ("desktop_computer", "🖥\u{fe0f}"),
  ("keyboard", "⌨\u{fe0f}"),
  ("iphone", "📱"),
  ("telephone_receiver", "📞"),
  ("bell", "🔔"),
  ("no_bell", "🔕"),
  ("loudspeaker", "📢"),
  ("mega", "📣"),
  ("hourglass", "⌛"),
  ("hourglass_flowing_sand", "⏳"),
  ("alarm_clock", "⏰"),
  ("stopwatch", "⏱\u{fe0f}"),
  ("moneybag", "💰"),
  ("dollar", "💵"),
  ("credit_card", "💳"),
  ("gem", "💎"),
  ("battery", "🔋"),
  ("electric_plug", "🔌"),
  ("camera", "📷"),
  ("movie_camera", "🎥"),
  ("microphone", "🎤"),
  ("headphones", "🎧"),
  ("musical_note", "🎵"),
  ("art", "🎨"),
  ("video_game", "🎮"),
  ("jigsaw", "🧩"),
  ("test_tube", "🧪"),
  ("dna", "🧬"),
  ("microscope", "🔬"),
  ("telescope", "🔭"),
  ("satellite", "📡"),
  ("pill", "💊"),
  ("shield", "🛡\u{fe0f}"),
  ("crystal_ball", "🔮"),
  ("magic_wand", "🪄"),
  ("thread", "🧵"),
  ("toolbox", "🧰"),
  ("coffee", "☕"),
  ("tea", "🍵"),
  ("beer", "🍺"),
  ("beers", "🍻"),
  ("wine_glass", "🍷"),
  ("pizza", "🍕"),
  ("hamburger", "🍔"),
  ("taco", "🌮"),
  ("doughnut", "🍩"),
  ("cookie", "🍪"),
  ("cake", "🍰"),
  ("birthday", "🎂"),
  ("apple", "🍎"),
  ("banana", "🍌"),
  ("avocado", "🥑"),
  ("popcorn", "🍿"),
  // Nature
  ("sunny", "☀\u{fe0f}"),
  ("cloud", "☁\u{fe0f}"),
  ("umbrella", "☔"),
  ("snowflake", "❄\u{fe0f}"),
  ("rainbow", "🌈"),
  ("ocean", "🌊"),
  ("earth_americas", "🌎"),
  ("earth_africa", "🌍"),
  ("crescent_moon", "🌙"),
  ("seedling", "🌱"),
  ("evergreen_tree", "🌲"),
  ("deciduous_tree", "🌳"),
  ("cactus", "🌵"),
  ("four_leaf_clover", "🍀"),
  ("maple_leaf", "🍁"),
  ("fallen_leaf", "🍂"),
  ("rose", "🌹"),
  ("sunflower", "🌻"),
  ("cherry_blossom", "🌸"),
  ("mushroom", "🍄"),
  ("dog", "🐶"),
  ("cat", "🐱"),
  ("mouse", "🐭"),
  ("rabbit", "🐰"),
  ("fox_face", "🦊"),
  ("bear", "🐻"),
  ("panda_face", "🐼"),
  ("koala", "🐨"),
  ("tiger", "🐯"),
  ("lion_face", "🦁"),
  ("cow", "🐮"),
  ("pig", "🐷"),
  ("frog", "🐸"),
  ("monkey_face", "🐵"),
  ("chicken", "🐔"),
  ("penguin", "🐧"),
  ("bird", "🐦"),
  ("owl", "🦉"),
  ("eagle", "🦅"),
  ("duck", "🦆"),
  ("unicorn_face", "🦄"),
  ("bee", "🐝"),
  ("bug", "🐛"),
  ("butterfly", "🦋"),
  ("snail", "🐌"),
  ("turtle", "🐢"),
  ("snake", "🐍"),
  ("dragon", "🐉"),
  ("crab", "🦀"),
  ("octopus", "🐙"),
  ("whale", "🐳"),
  ("dolphin", "🐬"),
  ("fish", "🐟"),
  ("tropical_fish", "🐠"),
  ("shark", "🦈"),
  ("sloth", "🦥"),
  ("llama", "🦙"),
  ("sauropod", "🦕"),
  ("t-rex", "🦖"),
];

/// Alternate spellings mapped to a canonical name in [`EMOJI`].
///
/// Covers the platform's own historical names as well as common aliases
/// from other chat clients.
pub(super) const ALIASES: &[(&str, &str)] = &[
  ("thumbsup", "+1"),
  ("thumbsdown", "-1"),
  ("thumbs_up", "+1"),
  ("thumbs_down", "-1"),
  ("simple_smile", "slightly_smiling_face"),
  ("slight_smile", "slightly_smiling_face"),
  ("slightly_frowning", "slightly_frowning_face"),
  ("thinking", "thinking_face"),
  ("roll_eyes", "face_with_rolling_eyes"),
  ("rolling_eyes", "face_with_rolling_eyes"),
  ("hugs", "hugging_face"),
  ("hugging", "hugging_face"),
  ("nerd", "nerd_face"),
  ("robot", "robot_face"),
  ("zipper_mouth", "zipper_mouth_face"),
  ("money_mouth", "money_mouth_face"),
  ("upside_down", "upside_down_face"),
  ("cowboy_hat_face", "face_with_cowboy_hat"),
  ("raised_eyebrow", "face_with_raised_eyebrow"),
  ("monocle_face", "face_with_monocle"),
  ("hand_over_mouth", "face_with_hand_over_mouth"),
  ("cursing_face", "face_with_symbols_on_mouth"),
  ("mind_blown", "exploding_head"),
  ("star-struck", "star_struck"),
  ("grinning_face_with_star_eyes", "star_struck"),
  ("rolling_on_the_floor_laughing", "rofl"),
  ("satisfied", "laughing"),
  ("poop", "hankey"),
  ("shit", "hankey"),
  ("punch", "facepunch"),
  ("hand", "raised_hand"),
  ("raised_hand_with_fingers_splayed", "raised_hand"),
  ("heavy_heart_exclamation_mark_ornament", "heart"),
  ("red_heart", "heart"),
  ("collision", "boom"),
  ("flame", "fire"),
  ("lightning", "zap"),
  ("high_voltage", "zap"),
  ("checkmark", "heavy_check_mark"),
  ("check", "white_check_mark"),
  ("cross_mark", "x"),
  ("heavy_multiplication_x", "x"),
  ("party", "tada"),
  ("partying", "partying_face"),
  ("party_popper", "tada"),
  ("hourglass_done", "hourglass"),
  ("e-mail", "email"),
  ("memo_pad", "memo"),
  ("pencil", "memo"),
  ("light_bulb", "bulb"),
  ("mag_right", "mag"),
  ("magnifying_glass", "mag"),
  ("laptop", "computer"),
  ("phone", "iphone"),
  ("mobile_phone", "iphone"),
  ("telephone", "telephone_receiver"),
  ("hot_beverage", "coffee"),
  ("sun", "sunny"),
  ("globe", "earth_americas"),
  ("puppy", "dog"),
  ("kitty", "cat"),
  ("unicorn", "unicorn_face"),
  ("fox", "fox_face"),
  ("lion", "lion_face"),
  ("dino", "sauropod"),
  ("trex", "t-rex"),
  ("shrugging", "shrug"),
  ("face_palm", "facepalm"),
  ("muscle_arm", "muscle"),
  ("hundred", "100"),
  ("siren", "rotating_light"),
  ("red_flag", "triangular_flag_on_post"),
  ("lock_closed", "lock"),
  ("lock_open", "unlock"),
  ("sparkle", "sparkles"),
  ("glowing_star", "star2"),
  ("eye", "eyes"),
  ("tools", "hammer_and_wrench"),
  ("cog", "gear"),
];

/// Fitzpatrick modifiers addressed as `:skin-tone-N:`.
pub(super) const SKIN_TONES: &[(&str, &str)] = &[
  ("skin-tone-2", "\u{1f3fb}"),
  ("skin-tone-3", "\u{1f3fc}"),
  ("skin-tone-4", "\u{1f3fd}"),
  ("skin-tone-5", "\u{1f3fe}"),
  ("skin-tone-6", "\u{1f3ff}"),
];
