// ============================================================================
// CATÁLOGO DE SERVICIOS - Listado estático que ofrece el spa
// ============================================================================
// El alta de reservas manda el tag (enum del backend); nombre, descripción
// y precio son solo de presentación.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Servicio {
    pub nombre: &'static str,
    pub descripcion: &'static str,
    pub precio: u32,
    pub tag: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CategoriaServicios {
    pub nombre: &'static str,
    pub servicios: &'static [Servicio],
}

pub const CATALOGO: &[CategoriaServicios] = &[
    CategoriaServicios {
        nombre: "Masajes",
        servicios: &[
            Servicio {
                nombre: "Anti-stress",
                descripcion: "Un masaje relajante para aliviar el estrés.",
                precio: 5000,
                tag: "ANTI_STRESS",
            },
            Servicio {
                nombre: "Descontracturantes",
                descripcion: "Ideal para aliviar tensiones musculares.",
                precio: 5500,
                tag: "DESCONTRACTURANTE",
            },
            Servicio {
                nombre: "Masajes con piedras calientes",
                descripcion: "Relajación profunda con piedras calientes.",
                precio: 6000,
                tag: "PIEDRAS_CALIENTES",
            },
            Servicio {
                nombre: "Circulatorios",
                descripcion: "Mejora la circulación y reduce la retención de líquidos.",
                precio: 5200,
                tag: "CIRCULATORIO",
            },
        ],
    },
    CategoriaServicios {
        nombre: "Belleza",
        servicios: &[
            Servicio {
                nombre: "Lifting de pestañas",
                descripcion: "Realza tus pestañas con un efecto natural.",
                precio: 3500,
                tag: "LIFTING_PESTANAS",
            },
            Servicio {
                nombre: "Depilación facial",
                descripcion: "Elimina el vello facial con técnicas suaves.",
                precio: 2000,
                tag: "DEPILACION_FACIAL",
            },
            Servicio {
                nombre: "Belleza de manos y pies",
                descripcion: "Manicura y pedicura para un cuidado completo.",
                precio: 4000,
                tag: "BELLEZA_MANOS_PIES",
            },
        ],
    },
    CategoriaServicios {
        nombre: "Tratamientos Faciales",
        servicios: &[
            Servicio {
                nombre: "Punta de Diamante",
                descripcion: "Microexfoliación para una piel renovada.",
                precio: 4500,
                tag: "PUNTA_DIAMANTE",
            },
            Servicio {
                nombre: "Limpieza profunda + Hidratación",
                descripcion: "Limpieza e hidratación para un rostro radiante.",
                precio: 4800,
                tag: "LIMPIEZA_PROFUNDA",
            },
            Servicio {
                nombre: "Crio frecuencia facial",
                descripcion: "Efecto lifting instantáneo con shock térmico.",
                precio: 6000,
                tag: "CRIO_FRECUENCIA_FACIAL",
            },
        ],
    },
    CategoriaServicios {
        nombre: "Tratamientos Corporales",
        servicios: &[
            Servicio {
                nombre: "VelaSlim",
                descripcion: "Reducción de circunferencia corporal y celulitis.",
                precio: 7000,
                tag: "VELASLIM",
            },
            Servicio {
                nombre: "DermoHealth",
                descripcion: "Drenaje linfático y estimulación de microcirculación.",
                precio: 6500,
                tag: "DERMOHEALTH",
            },
            Servicio {
                nombre: "Criofrecuencia",
                descripcion: "Efecto lifting instantáneo para el cuerpo.",
                precio: 7500,
                tag: "CRIOFRECUENCIA",
            },
            Servicio {
                nombre: "Ultracavitación",
                descripcion: "Técnica reductora para moldear el cuerpo.",
                precio: 6800,
                tag: "ULTRACAVITACION",
            },
        ],
    },
    CategoriaServicios {
        nombre: "Servicios Grupales",
        servicios: &[
            Servicio {
                nombre: "Hidromasajes",
                descripcion: "Sesiones relajantes en hidromasaje.",
                precio: 3000,
                tag: "HIDROMASAJES",
            },
            Servicio {
                nombre: "Yoga",
                descripcion: "Clases de yoga para grupos.",
                precio: 2500,
                tag: "YOGA",
            },
        ],
    },
];

/// Lista plana para selects de formularios
pub fn catalogo_plano() -> Vec<&'static Servicio> {
    CATALOGO
        .iter()
        .flat_map(|categoria| categoria.servicios.iter())
        .collect()
}

pub fn buscar_por_tag(tag: &str) -> Option<&'static Servicio> {
    catalogo_plano().into_iter().find(|s| s.tag == tag)
}

/// Nombre de presentación para un tag; si el tag no está en el catálogo
/// (p. ej. un servicio nuevo del backend) se muestra el tag tal cual.
pub fn nombre_para_tag(tag: &str) -> &str {
    match buscar_por_tag(tag) {
        Some(servicio) => servicio.nombre,
        None => tag,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogo_plano_cubre_todas_las_categorias() {
        let total: usize = CATALOGO.iter().map(|c| c.servicios.len()).sum();
        assert_eq!(catalogo_plano().len(), total);
        assert_eq!(total, 16);
    }

    #[test]
    fn buscar_por_tag_devuelve_la_entrada_definida() {
        let servicio = buscar_por_tag("PIEDRAS_CALIENTES").unwrap();
        assert_eq!(servicio.nombre, "Masajes con piedras calientes");
        assert_eq!(servicio.precio, 6000);

        assert!(buscar_por_tag("INEXISTENTE").is_none());
    }

    #[test]
    fn nombre_para_tag_cae_al_tag_desconocido() {
        assert_eq!(nombre_para_tag("YOGA"), "Yoga");
        assert_eq!(nombre_para_tag("NUEVO_SERVICIO"), "NUEVO_SERVICIO");
    }

    #[test]
    fn tags_sin_duplicados() {
        let mut tags: Vec<&str> = catalogo_plano().iter().map(|s| s.tag).collect();
        tags.sort_unstable();
        let antes = tags.len();
        tags.dedup();
        assert_eq!(tags.len(), antes);
    }
}
