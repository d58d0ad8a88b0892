/// Respuestas enlatadas para charla general, en orden de prioridad.
///
/// Solo se consultan cuando ninguna intención se dispara; ante empate de
/// puntuación gana la entrada declarada antes.
pub static CANNED_RESPONSES: &[(&str, &str)] = &[
  (
    "hello",
    "Hello! I'm your music assistant. Ask me about a song, an artist or what's trending, or say \
     \"recommend songs\" and I'll find music that fits your taste.",
  ),
  ("hi", "Hi there! What would you like to know about music today?"),
  ("how are you", "I'm doing great and ready to talk about music! What would you like to know?"),
  (
    "what can you do",
    "I can show the latest trending songs, recommend songs based on your preferences, give you \
     statistics about an artist and tell you about a specific song.",
  ),
  (
    "help",
    "Try things like \"what's trending\", \"recommend songs\", \"tell me about the artist Adele\" or \
     \"tell me about the song Imagine by John Lennon\".",
  ),
  ("who are you", "I'm Cadenza, a chatbot that answers questions about the songs in my music catalog."),
  (
    "what is valence",
    "Valence goes from 0 to 1 and describes how positive a track sounds. High values feel happy or \
     cheerful, low values feel sad or angry.",
  ),
  (
    "what is acousticness",
    "Acousticness goes from 0 to 1 and measures how acoustic a track is. Higher values mean more \
     acoustic instruments.",
  ),
  (
    "what is danceability",
    "Danceability goes from 0 to 1 and describes how suitable a track is for dancing, based on its \
     rhythm stability and beat strength.",
  ),
  (
    "what is energy",
    "Energy goes from 0 to 1 and measures intensity and activity. Energetic tracks feel fast, loud \
     and noisy.",
  ),
  ("what is tempo", "Tempo is the speed of a track in beats per minute (BPM). Most songs sit between 60 and 180 BPM."),
  ("thank you", "You're welcome! Enjoy the music."),
  ("goodbye", "Goodbye! Type 'exit' whenever you want to leave."),
];
