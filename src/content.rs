//! Static catalogs rendered by the pages.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingCycle {
    Monthly,
    Annual,
}

impl BillingCycle {
    pub fn toggled(self) -> Self {
        match self {
            BillingCycle::Monthly => BillingCycle::Annual,
            BillingCycle::Annual => BillingCycle::Monthly,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct PricedPlan {
    pub name: &'static str,
    pub speed: &'static str,
    pub monthly: u32,
    /// Monthly price when billed yearly.
    pub annual: u32,
    pub features: &'static [&'static str],
    pub highlighted: bool,
}

impl PricedPlan {
    pub fn price(&self, cycle: BillingCycle) -> u32 {
        match cycle {
            BillingCycle::Monthly => self.monthly,
            BillingCycle::Annual => self.annual,
        }
    }

    /// Yearly amount saved by choosing annual billing.
    pub fn annual_discount(&self) -> u32 {
        self.monthly.saturating_sub(self.annual) * 12
    }
}

pub static HOME_PLANS: [PricedPlan; 3] = [
    PricedPlan {
        name: "Básico",
        speed: "100 Mbps",
        monthly: 79,
        annual: 67,
        features: &["Internet 100 Mbps", "Router WiFi incluido", "Instalación gratis", "Soporte técnico 24/7"],
        highlighted: false,
    },
    PricedPlan {
        name: "Premium",
        speed: "300 Mbps",
        monthly: 129,
        annual: 109,
        features: &[
            "Internet 300 Mbps",
            "Router WiFi 6",
            "Cable TV HD (80+ canales)",
            "Telefonía ilimitada",
            "Instalación express",
        ],
        highlighted: true,
    },
    PricedPlan {
        name: "Ultra",
        speed: "500 Mbps",
        monthly: 199,
        annual: 169,
        features: &[
            "Internet 500 Mbps",
            "Router WiFi 6 Mesh",
            "Cable TV 4K (150+ canales)",
            "Telefonía ilimitada",
            "IP pública estática",
            "Soporte prioritario",
        ],
        highlighted: false,
    },
];

pub static CATALOG_PLANS: [PricedPlan; 3] = [
    PricedPlan {
        name: "Básico",
        speed: "100 Mbps",
        monthly: 79,
        annual: 75,
        features: &["Internet Fibra Óptica", "WiFi 6 Router", "1 Decodificador HD"],
        highlighted: false,
    },
    PricedPlan {
        name: "Gamer",
        speed: "300 Mbps",
        monthly: 109,
        annual: 100,
        features: &[
            "Internet Fibra Simétrica",
            "WiFi 6 Router Potente",
            "2 Decodificadores 4K",
            "Prioridad de tráfico Gaming",
            "IP Pública Dinámica",
        ],
        highlighted: true,
    },
    PricedPlan {
        name: "Ultra",
        speed: "600 Mbps",
        monthly: 159,
        annual: 149,
        features: &[
            "Internet Fibra Simétrica",
            "WiFi 6 Mesh System",
            "3 Decodificadores 4K",
            "Canales Premium Incluidos",
            "Soporte VIP 24/7",
        ],
        highlighted: false,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Yes,
    No,
    Text(&'static str),
}

/// Feature matrix under the catalog plans, one value per plan in order.
pub const CATALOG_MATRIX: [(&str, [Cell; 3]); 7] = [
    ("Tecnología Fibra Óptica", [Cell::Yes, Cell::Yes, Cell::Yes]),
    ("Velocidad Simétrica", [Cell::Yes, Cell::Yes, Cell::Yes]),
    ("Router WiFi 6", [Cell::Yes, Cell::Yes, Cell::Yes]),
    ("Soporte Prioritario", [Cell::No, Cell::Yes, Cell::Yes]),
    ("IP Pública Estática", [Cell::No, Cell::No, Cell::Yes]),
    ("Canales HD", [Cell::Text("80+"), Cell::Text("120+"), Cell::Text("150+")]),
    ("Paramount+ Incluido", [Cell::No, Cell::Yes, Cell::Yes]),
];

pub struct Service {
    pub id: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub static SERVICES: [Service; 3] = [
    Service {
        id: "internet",
        icon: "📶",
        title: "Internet Fibra Óptica",
        summary: "Velocidad simétrica hasta 1 Gbps",
        description: "Experimenta la verdadera velocidad con nuestra fibra óptica simétrica dedicada al hogar.",
        features: &[
            "Velocidades simétricas de hasta 1000 Mbps",
            "Tecnología XGS-PON de última generación",
            "Router WiFi 6 (AX3000) incluido en todos los planes",
            "Baja latencia ideal para gaming y streaming",
            "Conexión estable sin interrupciones",
        ],
    },
    Service {
        id: "tv",
        icon: "📺",
        title: "Cable TV Premium",
        summary: "Más de 150 canales HD y 4K",
        description: "Disfruta del mejor entretenimiento con más de 150 canales en alta definición y contenido on-demand.",
        features: &[
            "Más de 150 canales (80+ en HD y 4K)",
            "Decodificador Android TV 4K con control por voz",
            "Pausa, retroceso y grabación en la nube",
            "Multi-pantalla: ve tu TV en tu celular o tablet",
            "Canales de deportes exclusivos",
        ],
    },
    Service {
        id: "telefonia",
        icon: "📞",
        title: "Telefonía Ilimitada",
        summary: "Llamadas ilimitadas a todo el Perú",
        description: "Comunícate sin límites con tus seres queridos con nuestra línea digital de voz clara.",
        features: &[
            "Llamadas ilimitadas a fijos nacionales",
            "Minutos libres a móviles de cualquier operador",
            "Identificador de llamadas avanzado",
            "Sin costo de instalación de línea",
            "Portabilidad numérica gratuita",
        ],
    },
];

#[derive(Debug, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    pub rating: u8,
}

impl Testimonial {
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect()
    }
}

/// Featured stories in the rotating carousel.
pub static FEATURED_TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        name: "Carlos Mendoza",
        role: "Gamer Profesional",
        quote: "La latencia es increíble. Mis partidas de Valorant nunca fueron tan fluidas. 5ms de ping constante.",
        rating: 5,
    },
    Testimonial {
        name: "María García",
        role: "Diseñadora Freelance",
        quote: "Subo archivos pesados en segundos. Antes tardaba horas, ahora son minutos. Cambió mi productividad.",
        rating: 5,
    },
    Testimonial {
        name: "José Rodríguez",
        role: "Padre de Familia",
        quote: "Mis 3 hijos en clases virtuales, mi esposa en videollamadas y yo jugando. Ningún problema.",
        rating: 5,
    },
    Testimonial {
        name: "Ana Torres",
        role: "Streamer",
        quote: "Stream en 1080p 60fps sin drops. Mi audiencia nota la diferencia. 100% recomendado.",
        rating: 5,
    },
];

/// Reviews on the testimonials page; `role` holds the customer's district.
pub static CUSTOMER_REVIEWS: [Testimonial; 6] = [
    Testimonial {
        name: "Carlos Mendoza",
        role: "San Isidro",
        quote: "La velocidad es increíble. Trabajo desde casa subiendo archivos pesados y nunca he tenido una caída.",
        rating: 5,
    },
    Testimonial {
        name: "Andrea Luján",
        role: "Miraflores",
        quote: "Me cambié de otro operador y la diferencia es abismal. El ping en juegos bajó a la mitad y Netflix ya no se corta.",
        rating: 5,
    },
    Testimonial {
        name: "Miguel Ángel",
        role: "La Molina",
        quote: "El soporte técnico es rápido de verdad. Tuve una duda con el WiFi y me ayudaron por WhatsApp al instante.",
        rating: 5,
    },
    Testimonial {
        name: "Lucía Fernández",
        role: "San Borja",
        quote: "Precio justo para la calidad que ofrecen. No te suben la tarifa a los meses como otros.",
        rating: 5,
    },
    Testimonial {
        name: "Roberto Campos",
        role: "Jesús María",
        quote: "La instalación fue súper limpia y ordenada. Los técnicos dejaron todo impecable.",
        rating: 5,
    },
    Testimonial {
        name: "Elena Vargas",
        role: "Surco",
        quote: "Tengo clases virtuales todo el día y la conexión es súper estable. Mis hijos también juegan online sin problemas.",
        rating: 5,
    },
];

pub const STATS: [(&str, &str); 4] = [
    ("5,000+", "Clientes Activos"),
    ("98%", "Satisfacción"),
    ("99.9%", "Uptime Anual"),
    ("12+", "Distritos"),
];

pub type QandA = (&'static str, &'static str);

pub static HOME_FAQ: [QandA; 4] = [
    (
        "¿Cuánto tiempo toma la instalación?",
        "La instalación estándar se realiza en 24-48 horas después de la confirmación del pedido. Para zonas con cobertura existente, puede ser el mismo día.",
    ),
    (
        "¿Cuál es el costo de instalación?",
        "La instalación es completamente GRATIS en todos nuestros planes. Solo pagas tu primera mensualidad.",
    ),
    (
        "¿Tienen contrato de permanencia?",
        "No manejamos contratos de permanencia obligatorios. Puedes cancelar en cualquier momento sin penalidades.",
    ),
    (
        "¿Qué pasa si tengo problemas técnicos?",
        "Contamos con soporte técnico 24/7. Puedes contactarnos por WhatsApp, llamada telefónica o a través de nuestra app móvil.",
    ),
];

pub struct FaqCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub entries: &'static [QandA],
}

pub static FAQ_CATEGORIES: [FaqCategory; 4] = [
    FaqCategory {
        id: "general",
        name: "General",
        entries: &[
            (
                "¿En qué distritos tienen cobertura?",
                "Actualmente cubrimos Miraflores, San Isidro, Surco, La Molina, San Borja, Barranco, Jesús María y Lince.",
            ),
            (
                "¿Hay contrato de permanencia?",
                "No. Nuestros planes no tienen contratos forzosos ni penalidades por cancelación.",
            ),
            (
                "¿Qué incluyen los planes?",
                "Todos los planes incluyen instalación gratuita, router WiFi 6 de última generación y soporte técnico prioritario.",
            ),
        ],
    },
    FaqCategory {
        id: "tecnico",
        name: "Soporte Técnico",
        entries: &[
            (
                "¿Qué es la velocidad simétrica?",
                "Significa que tienes la misma velocidad para descargar y para subir. Ideal para videollamadas, streaming y la nube.",
            ),
            (
                "¿Qué hago si mi internet está lento?",
                "Reinicia tu router (desenchúfalo 10 segundos). Si persiste, escríbenos por WhatsApp y haremos un diagnóstico remoto.",
            ),
            (
                "¿Puedo cambiar mi contraseña del WiFi?",
                "¡Sí! Desde nuestra app o solicitándolo a través de nuestros canales de atención.",
            ),
        ],
    },
    FaqCategory {
        id: "pagos",
        name: "Pagos y Facturación",
        entries: &[
            (
                "¿Cómo puedo pagar mi recibo?",
                "Aceptamos Yape, Plin, transferencia bancaria (BCP, Interbank, BBVA) y tarjeta de crédito o débito.",
            ),
            (
                "¿Cuándo vence mi recibo?",
                "Los recibos vencen el día 15 de cada mes. Te enviamos un recordatorio 3 días antes.",
            ),
            ("¿Dan factura?", "Sí, los planes para empresas y RUC 10 incluyen factura electrónica."),
        ],
    },
    FaqCategory {
        id: "instalacion",
        name: "Instalación",
        entries: &[
            (
                "¿Cuánto demora la instalación?",
                "Programamos la instalación en un plazo máximo de 24 a 48 horas.",
            ),
            (
                "¿Tiene costo de instalación?",
                "La instalación es 100% gratuita para nuevos clientes en zonas de cobertura.",
            ),
            (
                "¿Necesito cableado especial?",
                "Nosotros nos encargamos de todo. Llevamos la fibra óptica hasta tu hogar e instalamos los equipos.",
            ),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annual_billing_is_cheaper() {
        let premium = &HOME_PLANS[1];
        assert_eq!(premium.price(BillingCycle::Monthly), 129);
        assert_eq!(premium.price(BillingCycle::Annual), 109);
        assert_eq!(premium.annual_discount(), 240);
        for plan in HOME_PLANS.iter().chain(CATALOG_PLANS.iter()) {
            assert!(plan.annual <= plan.monthly, "{}", plan.name);
        }
    }

    #[test]
    fn exactly_one_highlighted_plan_per_catalog() {
        assert_eq!(HOME_PLANS.iter().filter(|p| p.highlighted).count(), 1);
        assert_eq!(CATALOG_PLANS.iter().filter(|p| p.highlighted).count(), 1);
    }

    #[test]
    fn toggling_cycle_flips() {
        assert_eq!(BillingCycle::Monthly.toggled(), BillingCycle::Annual);
        assert_eq!(BillingCycle::Annual.toggled(), BillingCycle::Monthly);
    }

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(FEATURED_TESTIMONIALS[0].initials(), "CM");
        assert_eq!(CUSTOMER_REVIEWS[3].initials(), "LF");
    }

    #[test]
    fn every_faq_category_has_entries() {
        for category in FAQ_CATEGORIES.iter() {
            assert_eq!(category.entries.len(), 3, "{}", category.id);
        }
    }
}
