//! The built-in bilingual catalog.
//!
//! Ten categories of seven words. Clues are deliberately one step vaguer
//! than the word: close enough for an impostor to bluff with, too vague to
//! pin the word down.

use crate::{Category, WordEntry};

const fn w(
    text: &'static str,
    text_es: &'static str,
    clue: &'static str,
    clue_es: &'static str,
) -> WordEntry {
    WordEntry {
        text,
        text_es: Some(text_es),
        clue,
        clue_es: Some(clue_es),
    }
}

/// The default catalog used by [`WordBank::builtin`](crate::WordBank::builtin).
pub static CATALOG: &[Category] = &[
    Category {
        name: "Animals",
        words: &[
            w("Dog", "Perro", "Common pet", "Mascota común"),
            w("Cat", "Gato", "Feline", "Felino"),
            w("Elephant", "Elefante", "Large mammal", "Mamífero grande"),
            w("Lion", "León", "Big cat", "Felino grande"),
            w("Dolphin", "Delfín", "Marine mammal", "Mamífero marino"),
            w("Eagle", "Águila", "Bird of prey", "Ave rapaz"),
            w("Penguin", "Pingüino", "Flightless bird", "Ave no voladora"),
        ],
    },
    Category {
        name: "Countries",
        words: &[
            w("Japan", "Japón", "East Asian nation", "Nación de Asia Oriental"),
            w("Brazil", "Brasil", "South American", "Sudamericano"),
            w("France", "Francia", "Western European", "Europeo occidental"),
            w("Australia", "Australia", "Oceanic continent", "Continente oceánico"),
            w("Egypt", "Egipto", "North African", "Norteafricano"),
            w("Canada", "Canadá", "North American", "Norteamericano"),
            w("India", "India", "South Asian", "Surasiático"),
        ],
    },
    Category {
        name: "Food",
        words: &[
            w("Pizza", "Pizza", "Italian dish", "Plato italiano"),
            w("Sushi", "Sushi", "Japanese cuisine", "Cocina japonesa"),
            w("Tacos", "Tacos", "Mexican food", "Comida mexicana"),
            w("Burger", "Hamburguesa", "Fast food", "Comida rápida"),
            w("Pasta", "Pasta", "Italian carbs", "Carbohidratos italianos"),
            w("Curry", "Curri", "Spiced dish", "Plato especiado"),
            w("Ramen", "Ramen", "Noodle soup", "Sopa de fideos"),
        ],
    },
    Category {
        name: "Sports",
        words: &[
            w("Soccer", "Fútbol", "Team ball sport", "Deporte de equipo con balón"),
            w("Basketball", "Baloncesto", "Indoor court game", "Juego de cancha cubierta"),
            w("Tennis", "Tenis", "Racket sport", "Deporte de raqueta"),
            w("Swimming", "Natación", "Water activity", "Actividad acuática"),
            w("Boxing", "Boxeo", "Combat sport", "Deporte de combate"),
            w("Golf", "Golf", "Club and ball", "Palo y pelota"),
            w("Baseball", "Béisbol", "Bat sport", "Deporte de bate"),
        ],
    },
    Category {
        name: "Professions",
        words: &[
            w("Doctor", "Médico", "Healthcare", "Sanidad"),
            w("Teacher", "Maestro", "Education", "Educación"),
            w("Engineer", "Ingeniero", "Technical field", "Campo técnico"),
            w("Chef", "Chef", "Culinary expert", "Experto culinario"),
            w("Pilot", "Piloto", "Aviation", "Aviación"),
            w("Lawyer", "Abogado", "Legal professional", "Profesional legal"),
            w("Artist", "Artista", "Creative work", "Trabajo creativo"),
        ],
    },
    Category {
        name: "Colors",
        words: &[
            w("Red", "Rojo", "Primary color", "Color primario"),
            w("Blue", "Azul", "Cool tone", "Tono frío"),
            w("Yellow", "Amarillo", "Bright primary", "Primario brillante"),
            w("Green", "Verde", "Nature color", "Color de la naturaleza"),
            w("Purple", "Morado", "Mixed color", "Color mezclado"),
            w("Orange", "Naranja", "Warm secondary", "Secundario cálido"),
            w("Pink", "Rosa", "Light shade", "Tono claro"),
        ],
    },
    Category {
        name: "Movie Genres",
        words: &[
            w("Action", "Acción", "Exciting films", "Películas emocionantes"),
            w("Comedy", "Comedia", "Funny movies", "Películas divertidas"),
            w("Horror", "Terror", "Scary films", "Películas de miedo"),
            w("Romance", "Romance", "Love stories", "Historias de amor"),
            w("Thriller", "Suspense", "Suspenseful", "Lleno de suspenso"),
            w("Drama", "Drama", "Serious films", "Películas serias"),
            w("Sci-Fi", "Ciencia ficción", "Future and space", "Futuro y espacio"),
        ],
    },
    Category {
        name: "Technology",
        words: &[
            w("Smartphone", "Teléfono inteligente", "Mobile device", "Dispositivo móvil"),
            w("Laptop", "Portátil", "Portable computer", "Ordenador portátil"),
            w("Tablet", "Tableta", "Touch screen", "Pantalla táctil"),
            w("Smartwatch", "Reloj inteligente", "Wearable tech", "Tecnología vestible"),
            w("Camera", "Cámara", "Photo device", "Dispositivo de fotos"),
            w("Headphones", "Auriculares", "Audio gear", "Equipo de audio"),
            w("Drone", "Dron", "Flying device", "Dispositivo volador"),
        ],
    },
    Category {
        name: "Music Genres",
        words: &[
            w("Rock", "Rock", "Guitar-heavy", "Mucha guitarra"),
            w("Jazz", "Jazz", "Improvised music", "Música improvisada"),
            w("Pop", "Pop", "Mainstream hits", "Éxitos comerciales"),
            w("Classical", "Clásica", "Orchestra music", "Música de orquesta"),
            w("Hip Hop", "Hip hop", "Rap music", "Música rap"),
            w("Country", "Country", "American folk", "Folk estadounidense"),
            w("Electronic", "Electrónica", "Synthesized", "Sintetizada"),
        ],
    },
    Category {
        name: "Vehicles",
        words: &[
            w("Car", "Coche", "Four-wheeled", "De cuatro ruedas"),
            w("Bicycle", "Bicicleta", "Two-wheeled pedal", "Dos ruedas a pedales"),
            w("Airplane", "Avión", "Flying transport", "Transporte aéreo"),
            w("Boat", "Barco", "Water vessel", "Embarcación"),
            w("Train", "Tren", "Rail transport", "Transporte ferroviario"),
            w("Motorcycle", "Motocicleta", "Two-wheeled motor", "Dos ruedas a motor"),
            w("Helicopter", "Helicóptero", "Rotorcraft", "Aeronave de rotor"),
        ],
    },
];
