pub const DEFAULT_SPECIES: [&str; 8] = [
    "Clownfish (Amphiprioninae)",
    "Blue Tang (Paracanthurus hepatus)",
    "Emperor Angelfish (Pomacanthus imperator)",
    "Brain Coral (Lobophyllia hemprichii)",
    "Staghorn Coral (Acropora cervicornis)",
    "Sea Turtle (Chelonioidea)",
    "Moorish Idol (Zanclus cornutus)",
    "Giant Clam (Tridacna gigas)",
];
