/// Country names in Portuguese, used by the data-generation utilities.
pub const COUNTRIES: &[&str] = &[
    "Afeganistão", "África do Sul", "Albânia", "Alemanha", "Andorra", "Angola",
    "Arábia Saudita", "Argélia", "Argentina", "Armênia", "Austrália", "Áustria",
    "Azerbaijão", "Bahamas", "Bangladesh", "Barbados", "Bélgica", "Belize", "Benin",
    "Bielorrússia", "Bolívia", "Bósnia e Herzegovina", "Botsuana", "Brasil", "Bulgária",
    "Burkina Faso", "Burundi", "Butão", "Cabo Verde", "Camarões", "Camboja", "Canadá",
    "Catar", "Cazaquistão", "Chade", "Chile", "China", "Chipre", "Colômbia", "Comores",
    "Coreia do Norte", "Coreia do Sul", "Costa do Marfim", "Costa Rica", "Croácia",
    "Cuba", "Dinamarca", "Djibuti", "Egito", "El Salvador", "Emirados Árabes Unidos",
    "Equador", "Eritreia", "Eslováquia", "Eslovênia", "Espanha", "Estados Unidos",
    "Estônia", "Etiópia", "Fiji", "Filipinas", "Finlândia", "França", "Gabão", "Gâmbia",
    "Gana", "Geórgia", "Grécia", "Guatemala", "Guiana", "Guiné", "Guiné-Bissau",
    "Haiti", "Honduras", "Hungria", "Iêmen", "Índia", "Indonésia", "Irã", "Iraque",
    "Irlanda", "Islândia", "Israel", "Itália", "Jamaica", "Japão", "Jordânia", "Quênia",
    "Kuwait", "Laos", "Letônia", "Líbano", "Libéria", "Líbia", "Lituânia", "Luxemburgo",
    "Madagascar", "Malásia", "Malawi", "Mali", "Malta", "Marrocos", "México",
    "Moçambique", "Moldávia", "Mônaco", "Mongólia", "Montenegro", "Namíbia", "Nepal",
    "Nicarágua", "Níger", "Nigéria", "Noruega", "Nova Zelândia", "Omã", "Países Baixos",
    "Panamá", "Paquistão", "Paraguai", "Peru", "Polônia", "Portugal", "Reino Unido",
    "República Tcheca", "República Dominicana", "Romênia", "Ruanda", "Rússia",
    "São Tomé e Príncipe", "Senegal", "Sérvia", "Singapura", "Síria", "Somália",
    "Sri Lanka", "Sudão", "Suécia", "Suíça", "Suriname", "Tailândia", "Tanzânia",
    "Timor-Leste", "Togo", "Tunísia", "Turquia", "Ucrânia", "Uganda", "Uruguai",
    "Venezuela", "Vietnã", "Zâmbia", "Zimbábue",
];
